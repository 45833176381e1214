use mcp_recipe_finder::translation::{
    count_ingredients, localize, normalize_ingredients, Translations, TranslationTable,
};
use mcp_recipe_finder::translation::builtin;
use mcp_recipe_finder::translation::localizer::localize_word;
use mcp_recipe_finder::translation::normalizer::normalize_phrase;
use pretty_assertions::assert_eq;

#[test]
fn test_normalize_exact_matches() {
    let translations = Translations::builtin();

    assert_eq!(
        translations.normalize_ingredients("yumurta,domates,peynir"),
        "egg,tomato,cheese"
    );
}

#[test]
fn test_normalize_unknown_ingredient_passes_through() {
    let translations = Translations::builtin();

    assert_eq!(
        translations.normalize_ingredients("bilinmeyen_malzeme"),
        "bilinmeyen_malzeme"
    );
    assert_eq!(translations.normalize_ingredients("XyzQW"), "xyzqw");
}

#[test]
fn test_normalize_trims_lowercases_and_keeps_empty_segments() {
    let translations = Translations::builtin();

    let normalized = translations.normalize_ingredients(" Tavuk Göğsü , , SOĞAN ");
    assert_eq!(normalized, "chicken breast,,onion");
    assert_eq!(count_ingredients(&normalized), 2);
}

#[test]
fn test_normalize_preserves_segment_count_and_order() {
    let translations = Translations::builtin();
    let inputs = [
        "yumurta",
        "a,b,c,d",
        ",,,",
        "peynir, xyz ,un,",
        "kıyma,  ,domates salçası,tereyağı",
    ];

    for input in inputs {
        let output = translations.normalize_ingredients(input);
        assert_eq!(
            output.split(',').count(),
            input.split(',').count(),
            "segment count changed for {:?} -> {:?}",
            input,
            output
        );
    }

    assert_eq!(
        translations.normalize_ingredients("peynir, xyz ,un,"),
        "cheese,xyz,flour,"
    );
}

#[test]
fn test_normalize_substring_fallback_takes_first_entry_in_table_order() {
    let translations = Translations::builtin();

    // "tavuk göğsü" is defined before "tavuk", so the longer phrase wins
    assert_eq!(
        normalize_phrase(&translations.ingredients, "tavuk göğsü fileto"),
        "chicken breast"
    );
    // phrase contained in a key
    assert_eq!(normalize_phrase(&translations.ingredients, "yumurt"), "egg");
    // key contained in phrase
    assert_eq!(normalize_phrase(&translations.ingredients, "taze fasulyesi"), "beans");
}

#[test]
fn test_normalize_is_not_idempotent_on_fallback_path() {
    let translations = Translations::builtin();

    let once = translations.normalize_ingredients("ton balığı");
    assert_eq!(once, "tuna");

    // "un" (flour) is a substring of "tuna"
    let twice = translations.normalize_ingredients(&once);
    assert_eq!(twice, "flour");
}

#[test]
fn test_every_builtin_key_maps_to_its_value() {
    let translations = Translations::builtin();

    for (key, value) in builtin::INGREDIENTS {
        assert_eq!(translations.normalize_ingredients(key), *value, "ingredient key {}", key);
    }
    for (key, value) in builtin::RECIPE_TERMS {
        assert_eq!(translations.recipe_terms.lookup(key), Some(*value), "recipe term {}", key);
    }
}

#[test]
fn test_localize_title() {
    let translations = Translations::builtin();

    assert_eq!(
        translations.localize("Grilled Chicken with Cheese"),
        "Izgara tavuk ile peynir"
    );
    assert_eq!(
        translations.localize("Creamy Mushroom Soup"),
        "Kremalı mantar çorba"
    );
}

#[test]
fn test_localize_strips_punctuation_and_collapses_whitespace() {
    let translations = Translations::builtin();

    assert_eq!(
        translations.localize("Stuffed Eggplants (Karnıyarık)!"),
        "Doldurulmuş patlıcan karnıyarık"
    );
    assert_eq!(
        translations.localize("Spinach Omelette: Quick and Easy"),
        "Ispanak omlet hızlı ve kolay"
    );
    assert_eq!(translations.localize("  spaced   out  title  "), "Spaced out title");
}

#[test]
fn test_localize_keeps_unknown_words() {
    let translations = Translations::builtin();

    assert_eq!(translations.localize("Qux Zap"), "Qux zap");
    assert_eq!(
        translations.localize("Chocolate Chip Cookies"),
        "Çikolata chip kurabiye"
    );
}

#[test]
fn test_localize_blank_input_is_unchanged() {
    let translations = Translations::builtin();

    assert_eq!(translations.localize(""), "");
    assert_eq!(translations.localize("   "), "   ");
}

#[test]
fn test_localize_capitalizes_only_first_character() {
    let translations = Translations::builtin();

    for input in ["zzz", "ZZZ top", "Honey-Glazed Carrots", "123 Easy Steps"] {
        let output = translations.localize(input);
        let first = output.chars().next().expect("non-empty output");
        assert!(!first.is_lowercase(), "first char of {:?} is lowercase", output);
        let rest: String = output.chars().skip(1).collect();
        assert_eq!(rest, rest.to_lowercase());
    }
}

#[test]
fn test_localize_word_punctuation_only_becomes_empty() {
    let translations = Translations::builtin();

    assert_eq!(localize_word(&translations.recipe_terms, "!!!"), "");
    assert_eq!(localize_word(&translations.recipe_terms, "\"tuna\""), "ton balığı");
}

#[test]
fn test_custom_table_order_and_duplicates() {
    let table = TranslationTable::new([
        ("Apple Pie", "elmalı turta"),
        ("apple", "elma"),
        ("APPLE", "ignored"),
        ("  ", "ignored"),
    ]);

    assert_eq!(table.len(), 2);
    assert_eq!(table.exact("apple"), Some("elma"));
    // "apple pie" neither contains nor is contained in "apple juice"
    assert_eq!(table.fuzzy("apple juice"), Some("elma"));
    // "pie" is contained in the first key
    assert_eq!(table.fuzzy("pie"), Some("elmalı turta"));
    assert_eq!(table.fuzzy(""), None);
    assert_eq!(table.lookup("pear"), None);

    assert_eq!(normalize_ingredients(&table, "Apple,pear"), "elma,pear");
    assert_eq!(localize(&table, "Apple Tart"), "Elma tart");

    let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["apple pie", "apple"]);
}

#[test]
fn test_empty_table_is_identity() {
    let table = TranslationTable::default();

    assert!(table.is_empty());
    assert_eq!(normalize_ingredients(&table, " A , b "), "a,b");
    assert_eq!(localize(&table, "Hello World."), "Hello world");
}
