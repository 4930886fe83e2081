pub mod begin;
pub mod config;
pub mod end;
pub mod fork;
pub mod list;
pub mod next;
pub mod run;
pub mod status;
pub mod total;
pub mod verify;
pub mod wait;
