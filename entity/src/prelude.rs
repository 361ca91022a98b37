pub use super::league::Entity as League;
pub use super::league_cycle::Entity as LeagueCycle;
pub use super::mail::Entity as Mail;
pub use super::member::Entity as Member;
pub use super::ranking::Entity as Ranking;
pub use super::season::Entity as Season;
