pub mod career;
pub mod mind_map;
