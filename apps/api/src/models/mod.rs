pub mod ad;
pub mod brief;
