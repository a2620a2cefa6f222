use class_odds::{class_allowed, AbilityScores, RequirementTable, RuleSet, RulesError};

fn sorted_values(scores: &AbilityScores) -> Vec<u32> {
    let mut values = scores.values().to_vec();
    values.sort_unstable();
    values
}

#[test]
fn test_sorted_catalogs_keep_each_class_multiset() {
    for rule_set in RuleSet::ALL {
        let table = rule_set.table().unwrap();
        for (class, sorted) in table.classes().iter().zip(table.sorted()) {
            assert_eq!(
                sorted_values(class.minimums()),
                sorted_values(sorted.minimums()),
                "{rule_set}: {}",
                class.name()
            );
            assert_eq!(sorted.minimums(), &class.minimums().sorted_descending());
        }
    }
}

#[test]
fn test_subclass_minimums_as_written() {
    let table = RuleSet::Phb.table().unwrap();
    let find = |name: &str| {
        *table
            .classes()
            .iter()
            .find(|c| c.name() == name)
            .unwrap()
            .minimums()
    };

    assert!(find("Ranger").dominates(&find("Fighter")));
    assert!(find("Paladin").dominates(&find("Fighter")));
    assert!(find("Druid").dominates(&find("Cleric")));

    // these two rows keep the book's lower Con and Cha floors
    assert!(!find("Illusionist").dominates(&find("Magic-User")));
    assert!(!find("Assassin").dominates(&find("Thief")));
}

fn minimums_of(rule_set: RuleSet, name: &str) -> AbilityScores {
    let table = rule_set.table().unwrap();
    *table
        .classes()
        .iter()
        .find(|c| c.name() == name)
        .unwrap()
        .minimums()
}

#[test]
fn test_unearthed_arcana_subclass_minimums() {
    let ua = |name| minimums_of(RuleSet::UnearthedArcana, name);
    let fighter = ua("Fighter");

    for subclass in ["Barbarian", "Ranger", "Cavalier", "Paladin"] {
        assert!(ua(subclass).dominates(&fighter), "{subclass}");
    }
    assert!(ua("Paladin").dominates(&ua("Cavalier")));
    assert!(ua("Thief-Acrobat").dominates(&ua("Thief")));
    assert!(ua("Druid").dominates(&ua("Cleric")));

    assert_eq!(ua("Barbarian").values(), &[15, 3, 6, 14, 15, 6]);
    assert_eq!(ua("Cavalier").values(), &[15, 10, 10, 15, 15, 6]);
}

#[test]
fn test_custom_catalog() {
    let table = RequirementTable::parse(
        "
        # homebrew
        Scholar   3 16  3  3  3  3
        Brute    16  3  3  3 16  3   # strong and tough
        ",
    )
    .unwrap();

    assert_eq!(table.len(), 2);
    let scores = AbilityScores::new([17, 10, 10, 10, 16, 8]);
    assert!(!class_allowed(&table.classes()[0], &scores));
    assert!(class_allowed(&table.classes()[1], &scores));
}

#[test]
fn test_custom_catalog_errors() {
    assert_eq!(RequirementTable::parse(""), Err(RulesError::Empty));
    assert!(matches!(
        RequirementTable::parse("Scholar 3 16 3 3 3"),
        Err(RulesError::Parse(_))
    ));
}
