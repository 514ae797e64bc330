//! Fixed item subsets grouped by unit value

/// Items worth more than 1000 each
pub const HIGH_VALUE_ITEMS: &[&str] = &[
    "beacon",
    "dragon_head",
    "nether_star",
    "skeleton_skull",
    "creeper_head",
    "dragon_egg",
    "elytra",
    "mace",
];

/// Items worth less than 1
pub const CHEAP_ITEMS: &[&str] = &["cobweb", "dead_bush", "snow", "dirt", "gravel"];

/// Items worth between 1 and 100
pub const MEDIUM_ITEMS: &[&str] = &["iron_ingot", "gold_ingot", "diamond", "emerald", "apple"];

/// Items worth more than 100
pub const EXPENSIVE_ITEMS: &[&str] = &["beacon", "dragon_egg", "elytra", "netherite_ingot"];
