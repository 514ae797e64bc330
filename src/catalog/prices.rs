//! Built-in unit values

/// `(identifier, unit value)` pairs backing [`super::PriceTable::global`].
pub const PRICE_LIST: &[(&str, f64)] = &[
    // Natural blocks
    ("dirt", 0.05),
    ("gravel", 0.1),
    ("sand", 0.1),
    ("cobblestone", 0.1),
    ("stone", 0.2),
    ("snow", 0.2),
    ("dead_bush", 0.1),
    ("cobweb", 0.5),
    ("netherrack", 0.05),
    ("end_stone", 0.8),
    ("obsidian", 6.0),
    ("clay_ball", 0.4),
    ("ice", 0.5),
    ("packed_ice", 4.5),
    ("blue_ice", 40.5),
    // Wood and plants
    ("oak_log", 0.5),
    ("spruce_log", 0.5),
    ("birch_log", 0.5),
    ("oak_planks", 0.125),
    ("stick", 0.0625),
    ("kelp", 0.25),
    ("dried_kelp", 0.3),
    ("bamboo", 0.1),
    ("sugar_cane", 0.4),
    ("cactus", 0.4),
    ("wheat", 0.5),
    ("pumpkin", 1.0),
    ("melon_slice", 0.2),
    ("vine", 0.3),
    ("lily_pad", 0.5),
    // Food
    ("apple", 2.5),
    ("golden_apple", 110.0),
    ("enchanted_golden_apple", 2400.0),
    ("bread", 1.5),
    ("carrot", 0.5),
    ("potato", 0.5),
    ("baked_potato", 0.75),
    ("cooked_beef", 2.0),
    ("cooked_porkchop", 2.0),
    ("cake", 9.0),
    // Mob drops
    ("rotten_flesh", 0.05),
    ("bone", 0.5),
    ("string", 0.4),
    ("gunpowder", 2.0),
    ("spider_eye", 1.0),
    ("slime_ball", 3.0),
    ("ender_pearl", 12.0),
    ("blaze_rod", 10.0),
    ("ghast_tear", 25.0),
    ("leather", 1.5),
    ("feather", 0.3),
    ("phantom_membrane", 15.0),
    ("shulker_shell", 250.0),
    ("totem_of_undying", 900.0),
    ("heart_of_the_sea", 1000.0),
    ("nautilus_shell", 80.0),
    ("trident", 1100.0),
    // Ores and minerals
    ("coal", 1.0),
    ("charcoal", 0.8),
    ("raw_iron", 6.0),
    ("iron_ingot", 8.0),
    ("iron_block", 72.0),
    ("raw_copper", 1.5),
    ("copper_ingot", 2.0),
    ("raw_gold", 10.0),
    ("gold_ingot", 12.0),
    ("gold_block", 108.0),
    ("redstone", 1.0),
    ("lapis_lazuli", 2.0),
    ("quartz", 2.5),
    ("amethyst_shard", 3.0),
    ("emerald", 20.0),
    ("emerald_block", 180.0),
    ("diamond", 64.0),
    ("diamond_block", 576.0),
    ("ancient_debris", 160.0),
    ("netherite_scrap", 170.0),
    ("netherite_ingot", 728.0),
    ("netherite_block", 6552.0),
    // Tools and gear
    ("diamond_sword", 130.0),
    ("diamond_pickaxe", 195.0),
    ("iron_pickaxe", 24.5),
    ("bow", 2.0),
    ("crossbow", 30.0),
    ("shield", 9.0),
    ("saddle", 200.0),
    ("name_tag", 150.0),
    ("enchanted_book", 50.0),
    ("elytra", 8000.0),
    ("mace", 3000.0),
    ("heavy_core", 2500.0),
    // Rare blocks and heads
    ("beacon", 5000.0),
    ("conduit", 1200.0),
    ("nether_star", 4000.0),
    ("dragon_egg", 50000.0),
    ("dragon_head", 2500.0),
    ("dragon_breath", 40.0),
    ("skeleton_skull", 1200.0),
    ("wither_skeleton_skull", 1800.0),
    ("creeper_head", 1500.0),
    ("zombie_head", 1200.0),
    ("sponge", 350.0),
    ("end_crystal", 60.0),
    ("experience_bottle", 5.0),
];
