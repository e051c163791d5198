//! Integration test: Load data -> Equip -> Level skills -> Read resolved stats
//!
//! Walks the flows combat and UI code rely on, using the bundled config.

use progression_core::equipment::{EffectConfig, EffectFilter};
use progression_core::{
    default_items, default_skills, default_templates, Attribute, AttributeResolver, BaseTemplate,
    Character, Element, EquipmentSlot, ExpiryScheduler, ItemDefinition, ItemKind, LevelUpError,
    ModifierLedger, ModifierRecord, NoLevelData, Origin, PermanentModifiers, Skill,
    SkillArchetype, SkillId, SkillStatVariant,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_damage_composition_example() {
    let mut stats = AttributeResolver::new(BaseTemplate::new("test").with(Attribute::Damage, 10.0));
    stats.add(ModifierRecord::additive(Attribute::Damage, Origin::Passive, 5.0));
    stats
        .add_permanent(ModifierRecord::multiplicative(Attribute::Damage, Origin::EquipmentWeapon, 0.2))
        .unwrap();
    stats.add(ModifierRecord::multiplicative(Attribute::Damage, Origin::Buff, 0.1));

    assert!(close(stats.get_current(Attribute::Damage), 19.8));
}

#[test]
fn test_level_up_sequence() {
    let mut skill = Skill::new("bolt", SkillStatVariant::default_for(SkillArchetype::Projectile));
    assert_eq!(skill.level(), 1);
    assert_eq!(skill.max_level(), 5);

    assert!(skill.level_up(3, &NoLevelData).is_ok());
    assert!(skill.level_up(2, &NoLevelData).is_err());
    assert!(skill.level_up(6, &NoLevelData).is_err());
    assert_eq!(skill.level(), 3);
}

#[test]
fn test_remove_never_added_is_silent() {
    let mut ledger = ModifierLedger::new();
    let kept = ModifierRecord::additive(Attribute::Health, Origin::LevelUp, 20.0);
    ledger.add(kept);

    let stranger = ModifierRecord::multiplicative(Attribute::Health, Origin::Buff, 0.5);
    assert!(!ledger.remove_matching(&stranger));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.snapshot(Origin::LevelUp), vec![kept]);
}

#[test]
fn test_fire_amplifier_leaves_water_skill_alone() {
    let mut hero = Character::new("hero", BaseTemplate::new("hero"));
    let catalog = default_skills();
    hero.learn_skill(catalog.instantiate(&SkillId::from("fire_bolt")).unwrap());
    hero.learn_skill(catalog.instantiate(&SkillId::from("tidal_orb")).unwrap());

    let amplifier = ItemDefinition::new("brand", "Brand", ItemKind::Special).with_effect(
        EffectConfig::AmplifyElement {
            filter: EffectFilter::elements([Element::Fire]),
            multiplier: 1.5,
        },
    );
    hero.equip(EquipmentSlot::Relic, amplifier).unwrap();

    let fire = SkillId::from("fire_bolt");
    let water = SkillId::from("tidal_orb");
    let fire_base = hero.skills().get(&fire).unwrap().current_variant().base().damage;
    let water_base = hero.skills().get(&water).unwrap().current_variant().base().damage;
    assert!(close(hero.skill_stats(&fire).unwrap().base().damage, fire_base * 1.5));
    assert!(close(hero.skill_stats(&water).unwrap().base().damage, water_base));

    hero.unequip(EquipmentSlot::Relic);
    assert!(close(hero.skill_stats(&fire).unwrap().base().damage, fire_base));
}

#[test]
fn test_full_character_flow_with_bundled_data() {
    let templates = default_templates();
    let items = default_items();
    let skills = default_skills();

    let mut hero = Character::new("hero", templates["mage"].clone());
    let bolt = SkillId::from("fire_bolt");
    let swiftness = SkillId::from("swiftness");
    hero.learn_skill(skills.instantiate(&bolt).unwrap());
    hero.learn_skill(skills.instantiate(&swiftness).unwrap());

    let base_move = Attribute::MoveSpeed.default_base();
    assert!(close(hero.attribute(Attribute::MoveSpeed), base_move * 1.1));

    hero.level_up_skill(&swiftness, 2, &skills).unwrap();
    assert!(close(hero.attribute(Attribute::MoveSpeed), base_move * 1.2));

    hero.level_up_skill(&bolt, 2, &skills).unwrap();
    let bolt_stats = hero.skill_stats(&bolt).unwrap().as_projectile().unwrap();
    assert!(close(bolt_stats.base.damage, 22.0));
    assert_eq!(bolt_stats.projectile_count, 2);

    // Rare ember ring: 1 + 0.5 × 1.25
    hero.equip(EquipmentSlot::Ring, items.get("ember_ring").unwrap().clone()).unwrap();
    hero.equip(EquipmentSlot::Amulet, items.get("seeker_amulet").unwrap().clone()).unwrap();
    let bolt_stats = hero.skill_stats(&bolt).unwrap().as_projectile().unwrap();
    assert!(close(bolt_stats.base.damage, 22.0 * 1.625));
    assert!(bolt_stats.is_homing);
    assert!(close(hero.attribute(Attribute::FireResistance), 0.1 + 0.15));

    // Levelling while equipped keeps the equipment effects
    hero.level_up_skill(&bolt, 3, &skills).unwrap();
    let bolt_stats = hero.skill_stats(&bolt).unwrap().as_projectile().unwrap();
    assert!(close(bolt_stats.base.damage, 27.0 * 1.625));

    assert_eq!(
        hero.level_up_skill(&bolt, 2, &skills),
        Err(LevelUpError::Downgrade { current: 3, requested: 2 })
    );
}

#[test]
fn test_permanent_modifiers_survive_save_and_load() {
    let items = default_items();
    let mut hero = Character::new("hero", BaseTemplate::new("hero"));
    hero.equip(EquipmentSlot::Weapon, items.get("storm_blade").unwrap().clone()).unwrap();
    hero.equip(EquipmentSlot::Armor, items.get("iron_plate").unwrap().clone()).unwrap();
    hero.stats_mut()
        .add(ModifierRecord::multiplicative(Attribute::Damage, Origin::Buff, 0.3));

    let saved = hero.permanent_modifiers().to_json().unwrap();
    let restored = ModifierLedger::with_durable(&PermanentModifiers::from_json(&saved).unwrap());
    let reloaded = AttributeResolver::with_ledger(BaseTemplate::new("hero"), restored);

    // Buffs are not persisted
    assert!(close(
        reloaded.get_current(Attribute::Damage) * 1.3,
        hero.attribute(Attribute::Damage)
    ));
    assert!(close(reloaded.get_current(Attribute::Defense), hero.attribute(Attribute::Defense)));
    assert!(close(reloaded.get_current(Attribute::MoveSpeed), hero.attribute(Attribute::MoveSpeed)));
}

#[test]
fn test_buff_expires_through_scheduler() {
    let mut hero = Character::new("hero", BaseTemplate::new("hero").with(Attribute::AttackSpeed, 1.0));
    let mut scheduler = ExpiryScheduler::new();
    let haste = ModifierRecord::multiplicative(Attribute::AttackSpeed, Origin::Buff, 0.25);

    let first = scheduler.grant(hero.stats_mut(), haste, 3.0);
    scheduler.grant(hero.stats_mut(), haste, 6.0);
    assert!(close(hero.attribute(Attribute::AttackSpeed), 1.5625));

    assert_eq!(scheduler.tick(4.0, hero.stats_mut()), vec![first]);
    assert!(close(hero.attribute(Attribute::AttackSpeed), 1.25));

    scheduler.tick(4.0, hero.stats_mut());
    assert!(close(hero.attribute(Attribute::AttackSpeed), 1.0));
}

#[test]
fn test_disabling_equipment_origin() {
    let items = default_items();
    let mut hero = Character::new("hero", BaseTemplate::new("hero"));
    hero.equip(EquipmentSlot::Armor, items.get("iron_plate").unwrap().clone()).unwrap();
    let armored = hero.attribute(Attribute::Defense);

    hero.stats_mut().set_enabled(Origin::EquipmentArmor, false).unwrap();
    assert!(close(hero.attribute(Attribute::Defense), 0.0));

    hero.stats_mut().set_enabled(Origin::EquipmentArmor, true).unwrap();
    assert!(close(hero.attribute(Attribute::Defense), armored));

    assert!(hero.stats_mut().set_enabled(Origin::Debuff, false).is_err());
}
