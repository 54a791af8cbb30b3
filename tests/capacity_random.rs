// tests/capacity_random.rs
//
// Случайные последовательности add/update/delete против простой модели
// (Vec пар в порядке вставки). После каждой операции:
// - len <= MAX_WORDS;
// - все ключи в lowercase;
// - результат (Outcome/Rejection) совпадает с моделью;
// - содержимое каталога совпадает с моделью.

use oorandom::Rand64;

use wordbook::consts::MAX_WORDS;
use wordbook::{Catalog, Outcome, Rejection};

const WORDS: &[&str] = &[
    "apple", "APPLE", "Banana", "cherry", "Date", "elder", "fig", "Grape", "kiwi", "lemon",
];

fn model_pos(model: &[(String, String)], key: &str) -> Option<usize> {
    model.iter().position(|(k, _)| k == key)
}

#[test]
fn random_ops_keep_invariants() {
    let mut rng = Rand64::new(0xB00C_u128);
    let mut cat = Catalog::new();
    let mut model: Vec<(String, String)> = Vec::new();

    for i in 0..2000usize {
        let word = WORDS[(rng.rand_u64() as usize) % WORDS.len()];
        let key = word.to_lowercase();
        let meaning = format!("m{i}");

        // 60% add, 20% update, 20% delete
        let op = rng.rand_u64() % 10;
        if op < 6 {
            let expected = if model.len() >= MAX_WORDS {
                Err(Rejection::CapacityExceeded)
            } else if model_pos(&model, &key).is_some() {
                Err(Rejection::DuplicateWord)
            } else {
                model.push((key.clone(), meaning.clone()));
                Ok(Outcome::Added)
            };
            assert_eq!(cat.add(word, &meaning), expected, "add #{i} {word}");
        } else if op < 8 {
            let expected = match model_pos(&model, &key) {
                Some(p) => {
                    model[p].1 = meaning.clone();
                    Ok(Outcome::Updated)
                }
                None => Err(Rejection::NotFound),
            };
            assert_eq!(cat.update(word, &meaning), expected, "update #{i} {word}");
        } else {
            let expected = match model_pos(&model, &key) {
                Some(p) => {
                    model.remove(p);
                    Ok(Outcome::Deleted)
                }
                None => Err(Rejection::NotFound),
            };
            assert_eq!(cat.delete(word), expected, "delete #{i} {word}");
        }

        assert!(cat.len() <= MAX_WORDS);
        assert!(cat.keys_normalized());
        let got: Vec<(String, String)> = cat
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(got, model, "state mismatch after op #{i}");
    }
}

#[test]
fn sixth_distinct_word_always_rejected() {
    let mut cat = Catalog::new();
    for w in ["a", "b", "c", "d", "e"] {
        assert_eq!(cat.add(w, "x"), Ok(Outcome::Added));
    }
    for w in ["f", "A", "zz", ""] {
        assert_eq!(cat.add(w, "x"), Err(Rejection::CapacityExceeded));
    }
    assert_eq!(cat.len(), MAX_WORDS);
}

#[test]
fn search_results_are_always_prefix_matches() {
    let mut rng = Rand64::new(42);
    let mut cat = Catalog::new();
    for w in ["apple", "apricot", "banana", "band", "cherry"] {
        cat.add(w, w).unwrap();
    }
    let keywords = ["", "a", "AP", "apr", "ban", "BAND", "c", "x", "applesauce"];
    for _ in 0..100 {
        let kw = keywords[(rng.rand_u64() as usize) % keywords.len()];
        let hits = cat.search(kw);
        let lower = kw.to_lowercase();
        let expected: Vec<_> = cat
            .words()
            .filter(|w| w.starts_with(lower.as_str()))
            .map(str::to_string)
            .collect();
        let got: Vec<_> = hits.into_iter().map(|(w, _)| w).collect();
        assert_eq!(got, expected, "keyword {kw:?}");
    }
}
