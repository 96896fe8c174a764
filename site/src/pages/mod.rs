//! Full pages composed from section components.

pub mod hackathon;

pub use hackathon::HackathonPage;
