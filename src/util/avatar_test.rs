use super::*;

#[test]
fn takes_first_two_characters_uppercased() {
    assert_eq!(avatar_initials(Some("Ada Lovelace")), "AD");
    assert_eq!(avatar_initials(Some("grace")), "GR");
}

#[test]
fn single_character_name_yields_one_initial() {
    assert_eq!(avatar_initials(Some("A")), "A");
}

#[test]
fn missing_or_empty_name_yields_glyph() {
    assert_eq!(avatar_initials(None), "?");
    assert_eq!(avatar_initials(Some("")), "?");
    assert_eq!(avatar_initials(Some("   ")), "?");
}

#[test]
fn multibyte_names_do_not_split_characters() {
    assert_eq!(avatar_initials(Some("Łukasz")), "ŁU");
    assert_eq!(avatar_initials(Some("李明")), "李明");
}
