//! ビューモジュール

pub mod accueil;
pub mod admin;
pub mod annonces;
pub mod cantine;
pub mod newsletter_form;
pub mod resultats;
pub mod scolarite;

pub use accueil::AccueilPage;
pub use admin::AdminPanel;
pub use annonces::AnnoncesPage;
pub use cantine::CantinePage;
pub use newsletter_form::NewsletterForm;
pub use resultats::ResultatsPage;
pub use scolarite::ScolaritePage;
