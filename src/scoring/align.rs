use crate::scoring::similarity::word_similarity;
use crate::types::AlignedPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Opcode {
    tag: OpTag,
    i1: usize,
    i2: usize,
    j1: usize,
    j2: usize,
}

/// Align the reference word sequence against the predicted one.
///
/// Returns exactly one [`AlignedPair`] per reference word, in reference
/// order, for any predicted sequence:
/// - `equal` regions pair 1:1 and still compute similarity generically;
/// - `delete` regions pair reference words with `None` at similarity 0;
/// - `replace` regions pair positionally, clamping to the last predicted
///   index once the predicted range runs out — overflow reference words are
///   never dropped;
/// - `insert` regions (extra predicted words) are discarded.
pub fn align_words(reference: &[String], predicted: &[String]) -> Vec<AlignedPair> {
    let mut pairs = Vec::with_capacity(reference.len());

    for op in edit_opcodes(reference, predicted) {
        match op.tag {
            OpTag::Equal => {
                for k in 0..op.i2 - op.i1 {
                    let ref_word = &reference[op.i1 + k];
                    let pred_word = &predicted[op.j1 + k];
                    pairs.push(AlignedPair {
                        reference: ref_word.clone(),
                        predicted: Some(pred_word.clone()),
                        similarity: word_similarity(ref_word, pred_word),
                    });
                }
            }
            OpTag::Delete => {
                for i in op.i1..op.i2 {
                    pairs.push(AlignedPair {
                        reference: reference[i].clone(),
                        predicted: None,
                        similarity: 0.0,
                    });
                }
            }
            OpTag::Insert => {
                // Over-production carries no word-level penalty; the
                // whole-text metric accounts for it.
            }
            OpTag::Replace => {
                let pred_len = op.j2 - op.j1;
                for k in 0..op.i2 - op.i1 {
                    let j = op.j1 + k.min(pred_len - 1);
                    let ref_word = &reference[op.i1 + k];
                    let pred_word = &predicted[j];
                    pairs.push(AlignedPair {
                        reference: ref_word.clone(),
                        predicted: Some(pred_word.clone()),
                        similarity: word_similarity(ref_word, pred_word),
                    });
                }
            }
        }
    }

    debug_assert_eq!(pairs.len(), reference.len());
    pairs
}

/// Minimal edit script between two word sequences as contiguous regions.
///
/// Longest-common-subsequence decomposition: matched runs become `equal`
/// regions, the gaps between them become `replace`/`delete`/`insert`
/// depending on which side has material.
fn edit_opcodes(a: &[String], b: &[String]) -> Vec<Opcode> {
    let n = a.len();
    let m = b.len();
    let width = m + 1;

    // Suffix-indexed LCS table: lcs[i * width + j] is the LCS length of
    // a[i..] against b[j..].
    let mut lcs = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if a[i] == b[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    // Walk one optimal path, advancing the reference side on ties so the
    // decomposition is deterministic.
    let mut matches: Vec<(usize, usize)> = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            matches.push((i, j));
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }

    let mut ops = Vec::new();
    let (mut pi, mut pj) = (0usize, 0usize);
    let mut k = 0usize;
    while k < matches.len() {
        let (mi, mj) = matches[k];
        push_gap(&mut ops, pi, mi, pj, mj);
        while k + 1 < matches.len()
            && matches[k + 1].0 == matches[k].0 + 1
            && matches[k + 1].1 == matches[k].1 + 1
        {
            k += 1;
        }
        let (ei, ej) = matches[k];
        ops.push(Opcode {
            tag: OpTag::Equal,
            i1: mi,
            i2: ei + 1,
            j1: mj,
            j2: ej + 1,
        });
        pi = ei + 1;
        pj = ej + 1;
        k += 1;
    }
    push_gap(&mut ops, pi, n, pj, m);
    ops
}

fn push_gap(ops: &mut Vec<Opcode>, i1: usize, i2: usize, j1: usize, j2: usize) {
    let tag = match (i1 < i2, j1 < j2) {
        (true, true) => OpTag::Replace,
        (true, false) => OpTag::Delete,
        (false, true) => OpTag::Insert,
        (false, false) => return,
    };
    ops.push(Opcode { tag, i1, i2, j1, j2 });
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn identical_sequences_pair_one_to_one() {
        let reference = words("THE QUICK FOX");
        let pairs = align_words(&reference, &reference);
        assert_eq!(pairs.len(), 3);
        for (pair, word) in pairs.iter().zip(reference.iter()) {
            assert_eq!(&pair.reference, word);
            assert_eq!(pair.predicted.as_deref(), Some(word.as_str()));
            assert_abs_diff_eq!(pair.similarity, 1.0);
        }
    }

    #[test]
    fn empty_predicted_marks_every_reference_word_absent() {
        let reference = words("THE QUICK FOX");
        let pairs = align_words(&reference, &[]);
        assert_eq!(pairs.len(), 3);
        for pair in &pairs {
            assert!(pair.predicted.is_none());
            assert_abs_diff_eq!(pair.similarity, 0.0);
        }
    }

    #[test]
    fn empty_reference_yields_no_pairs() {
        assert!(align_words(&[], &words("ANYTHING AT ALL")).is_empty());
    }

    #[test]
    fn replace_with_longer_reference_clamps_to_last_predicted() {
        let reference = words("AAA BBB CCC");
        let predicted = words("XYZ");
        let pairs = align_words(&reference, &predicted);
        assert_eq!(pairs.len(), 3);
        for pair in &pairs {
            assert_eq!(pair.predicted.as_deref(), Some("XYZ"));
            assert_abs_diff_eq!(pair.similarity, 0.0);
        }
    }

    #[test]
    fn replace_with_longer_prediction_keeps_reference_count() {
        let reference = words("AAA");
        let predicted = words("XYZ QQQ");
        let pairs = align_words(&reference, &predicted);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].predicted.as_deref(), Some("XYZ"));
    }

    #[test]
    fn inserted_predicted_words_are_discarded() {
        let reference = words("THE FOX");
        let predicted = words("THE BIG RED FOX");
        let pairs = align_words(&reference, &predicted);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].predicted.as_deref(), Some("THE"));
        assert_eq!(pairs[1].predicted.as_deref(), Some("FOX"));
    }

    #[test]
    fn mixed_script_keeps_reference_order_and_count() {
        let reference = words("THE QUICK BROWN FOX");
        let predicted = words("THE QUIK FOX");
        let pairs = align_words(&reference, &predicted);
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].predicted.as_deref(), Some("THE"));
        assert_abs_diff_eq!(pairs[1].similarity, 0.8);
        assert_eq!(pairs[1].predicted.as_deref(), Some("QUIK"));
        // BROWN overflows the replace region and clamps onto QUIK.
        assert_eq!(pairs[2].predicted.as_deref(), Some("QUIK"));
        assert_abs_diff_eq!(pairs[2].similarity, 0.0);
        assert_eq!(pairs[3].predicted.as_deref(), Some("FOX"));
    }

    #[test]
    fn duplicate_reference_words_each_get_a_pair() {
        let reference = words("AND AGAIN AND");
        let predicted = words("AND");
        let pairs = align_words(&reference, &predicted);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].predicted.as_deref(), Some("AND"));
        assert!(pairs[1].predicted.is_none());
        assert!(pairs[2].predicted.is_none());
    }

    #[test]
    fn pair_count_and_order_hold_for_arbitrary_inputs() {
        let cases = [
            ("", ""),
            ("A", ""),
            ("", "A"),
            ("A B C D E", "E D C B A"),
            ("A A A", "A"),
            ("ONE TWO THREE", "TWO"),
            ("ALPHA BETA GAMMA DELTA", "ALPHA GAMMA EPSILON"),
            ("X", "A B C D E F G"),
        ];
        for (ref_text, pred_text) in cases {
            let reference = words(ref_text);
            let predicted = words(pred_text);
            let pairs = align_words(&reference, &predicted);
            assert_eq!(pairs.len(), reference.len(), "case {ref_text:?} / {pred_text:?}");
            for (pair, word) in pairs.iter().zip(reference.iter()) {
                assert_eq!(&pair.reference, word);
            }
        }
    }
}
