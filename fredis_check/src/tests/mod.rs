
use super::*;

pub const COUNT: usize = 1000;

#[test]
fn boolean_samples_true_and_false() {
    assert!(<bool>::generator().sample(COUNT).any(|value| value));
    assert!(<bool>::generator().sample(COUNT).any(|value| !value));
}

#[test]
fn character_is_in_range() {
    assert!(('a'..='f').sample(COUNT).all(|value| ('a'..='f').contains(&value)));
    assert!(('a'..'f').sample(COUNT).all(|value| ('a'..'f').contains(&value)));
}

#[test]
fn sample_has_count() {
    for i in 0..100 {
        assert_eq!(<u8>::generator().sample(i).len(), i);
    }
}

#[test]
fn seeded_samples_repeat() {
    let left: Vec<_> = <i64>::generator().sample_seeded(COUNT, 42).collect();
    let right: Vec<_> = <i64>::generator().sample_seeded(COUNT, 42).collect();
    assert_eq!(left, right);
}

#[test]
fn collection_has_bounded_length() {
    assert!(<Vec<u8>>::generator()
        .sample(COUNT)
        .all(|value| value.len() <= generator::Count::RANGE.end));
    assert!(<String>::generator().sample(COUNT).any(|value| !value.is_empty()));
}

#[test]
fn bind_uses_generated_generator() {
    let generator = (1usize..10).bind(|count| Constant(count).map(move |value| vec![value; count]));
    assert!(generator
        .sample(COUNT)
        .all(|value| value.iter().all(|&item| item == value.len())));
}
