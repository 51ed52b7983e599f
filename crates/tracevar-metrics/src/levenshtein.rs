//! Levenshtein edit distance over symbol sequences

use tracevar_core::Trace;

/// Minimum number of single-symbol insertions, deletions and substitutions
/// turning `a` into `b`
///
/// Uses a single rolling row sized by the shorter sequence, so memory is
/// O(min(len_a, len_b)) and time is O(len_a * len_b).
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, long_sym) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, short_sym) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if short_sym == long_sym {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[short.len()]
}

/// Edit distance between two traces, each event code an atomic symbol
pub fn trace_distance(t1: &Trace, t2: &Trace) -> usize {
    let a: Vec<_> = t1.codes().collect();
    let b: Vec<_> = t2.codes().collect();
    levenshtein(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracevar_core::EventLog;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_classic_examples() {
        assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein(&chars("flaw"), &chars("lawn")), 2);
        assert_eq!(levenshtein(&chars("abc"), &chars("abc")), 0);
    }

    #[test]
    fn test_empty_sequences() {
        assert_eq!(levenshtein::<char>(&[], &[]), 0);
        assert_eq!(levenshtein(&chars(""), &chars("abcd")), 4);
        assert_eq!(levenshtein(&chars("abc"), &chars("")), 3);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("sunday", "saturday"), ("a", "xyz"), ("process", "proceed")];
        for (x, y) in pairs {
            assert_eq!(
                levenshtein(&chars(x), &chars(y)),
                levenshtein(&chars(y), &chars(x))
            );
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let words = ["abc", "abd", "xbd", "", "abcd", "dcba"];
        for x in words {
            for y in words {
                for z in words {
                    let xz = levenshtein(&chars(x), &chars(z));
                    let xy = levenshtein(&chars(x), &chars(y));
                    let yz = levenshtein(&chars(y), &chars(z));
                    assert!(xz <= xy + yz, "{} {} {}", x, y, z);
                }
            }
        }
    }

    #[test]
    fn test_trace_distance() {
        let log = EventLog::load(vec![vec!["a"], vec!["a", "b"], vec!["a", "b", "c"]]);
        let traces = log.traces();

        assert_eq!(trace_distance(&traces[0], &traces[0]), 0);
        assert_eq!(trace_distance(&traces[0], &traces[1]), 1);
        assert_eq!(trace_distance(&traces[0], &traces[2]), 2);
        assert_eq!(trace_distance(&traces[2], &traces[0]), 2);
    }
}
