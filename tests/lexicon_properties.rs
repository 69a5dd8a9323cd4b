//! Property tests for lexicon queries and round resolution.

use proptest::prelude::*;
use std::collections::BTreeSet;

use rust_ghost::{Lexicon, Move, PlayerId, Round, RoundOutcome};

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,6}", 1..20)
}

fn build(words: &[String]) -> Lexicon {
    let mut lexicon = Lexicon::new();
    for word in words {
        lexicon.insert(word);
    }
    lexicon
}

proptest! {
    #[test]
    fn prefix_iff_some_word_starts_with_it(words in words(), probe in "[a-f]{0,4}") {
        let lexicon = build(&words);
        let expected = probe.is_empty() || words.iter().any(|w| w.starts_with(probe.as_str()));
        prop_assert_eq!(lexicon.has_prefix(&probe), expected);
    }

    #[test]
    fn inserted_words_respect_min_length(words in words(), min_length in 0usize..8) {
        let lexicon = build(&words);
        for word in &words {
            prop_assert_eq!(lexicon.has_word(word, min_length), word.len() >= min_length);
        }
    }

    #[test]
    fn only_inserted_words_are_words(words in words(), probe in "[a-f]{0,6}") {
        let lexicon = build(&words);
        prop_assert_eq!(lexicon.is_word(&probe), words.contains(&probe));
    }

    #[test]
    fn continuations_match_prefix_extensions(words in words(), probe in "[a-e]{0,4}") {
        let lexicon = build(&words);
        match lexicon.valid_continuations(&probe) {
            None => prop_assert!(!lexicon.has_prefix(&probe)),
            Some(letters) => {
                prop_assert!(lexicon.has_prefix(&probe));
                let got: BTreeSet<char> = letters.iter().copied().collect();
                prop_assert_eq!(got.len(), letters.len());
                let expected: BTreeSet<char> = ('a'..='f')
                    .filter(|&c| lexicon.has_prefix(&format!("{probe}{c}")))
                    .collect();
                prop_assert_eq!(got, expected);
            }
        }
    }

    #[test]
    fn repeated_inserts_change_nothing(words in words(), probe in "[a-e]{0,6}") {
        let once = build(&words);
        let mut doubled = words.clone();
        doubled.extend(words.iter().cloned());
        let twice = build(&doubled);

        prop_assert_eq!(once.word_count(), twice.word_count());
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.has_prefix(&probe), twice.has_prefix(&probe));
        prop_assert_eq!(once.is_word(&probe), twice.is_word(&probe));
        prop_assert_eq!(once.valid_continuations(&probe), twice.valid_continuations(&probe));
    }

    #[test]
    fn every_prefix_has_a_word_beneath(words in words(), probe in "[a-e]{0,4}") {
        let lexicon = build(&words);
        prop_assume!(lexicon.has_prefix(&probe));
        prop_assert!(words.iter().any(|w| w.starts_with(probe.as_str())) || probe.is_empty());
        prop_assert!(lexicon.is_word(&probe) || !lexicon.valid_continuations(&probe).unwrap().is_empty());
    }

    #[test]
    fn formed_word_loser_is_the_mover(words in words(), pick in any::<prop::sample::Index>()) {
        let lexicon = build(&words);
        let word = pick.get(&words);
        prop_assume!(word.len() >= 3);

        let (stem, last) = word.split_at(word.len() - 1);
        prop_assume!(!(3..=stem.len()).any(|n| lexicon.is_word(&stem[..n])));

        let mut round = Round::resume(1, PlayerId::FIRST, stem, 3);
        let last = last.chars().next().unwrap();
        round.apply_move(&lexicon, Move::Letter(last)).unwrap();

        let result = round.result().unwrap();
        prop_assert_eq!(result.outcome, RoundOutcome::FormedWord);
        prop_assert_eq!(result.loser, PlayerId::FIRST);
    }

    #[test]
    fn challenge_won_iff_answer_fails(words in words(), fragment in "[a-e]{0,3}", answer in "[a-e]{0,6}") {
        let lexicon = build(&words);
        let mut round = Round::resume(1, PlayerId::SECOND, &fragment, 3);
        round.apply_move(&lexicon, Move::Challenge).unwrap();
        let result = round.apply_word(&lexicon, Some(answer.as_str())).unwrap();

        let repelled = answer.starts_with(fragment.as_str()) && lexicon.is_word(&answer);
        let expected = if repelled { RoundOutcome::LostChallenge } else { RoundOutcome::WonChallenge };
        prop_assert_eq!(result.outcome, expected);
        prop_assert_eq!(result.winner == PlayerId::SECOND, !repelled);
    }
}
