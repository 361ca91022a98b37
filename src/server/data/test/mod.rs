mod league;
mod league_cycle;
mod mail;
mod member;
mod ranking;
mod season;
