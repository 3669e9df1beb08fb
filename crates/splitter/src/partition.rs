use crate::types::UnitSpan;

/// Split `candidates` into the spans contained in some container and the
/// rest, preserving order.
///
/// Single left-to-right sweep, O(n+m). Caller contract: both lists are
/// sorted ascending by start byte and internally non-overlapping; the
/// sweep is undefined otherwise.
pub(crate) fn partition(
    candidates: &[UnitSpan],
    containers: &[UnitSpan],
) -> (Vec<UnitSpan>, Vec<UnitSpan>) {
    let mut contained = Vec::new();
    let mut remaining = Vec::new();
    let mut container_idx = 0;
    let mut candidate_idx = 0;

    while container_idx < containers.len() && candidate_idx < candidates.len() {
        let container = &containers[container_idx];
        let candidate = &candidates[candidate_idx];

        if container.contains(candidate) {
            contained.push(candidate.clone());
            candidate_idx += 1;
        } else if candidate.start_byte > container.end_byte {
            // candidate starts past this container, move to the next one
            container_idx += 1;
        } else {
            remaining.push(candidate.clone());
            candidate_idx += 1;
        }
    }

    // candidates past the last container are all outside
    remaining.extend_from_slice(&candidates[candidate_idx..]);
    (contained, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(start: usize, end: usize) -> UnitSpan {
        UnitSpan::new(start, end)
    }

    #[test]
    fn splits_contained_from_free() {
        let containers = vec![span(10, 50), span(60, 100)];
        let candidates = vec![span(0, 5), span(20, 30), span(55, 58), span(70, 80)];
        let (contained, remaining) = partition(&candidates, &containers);
        assert_eq!(contained, vec![span(20, 30), span(70, 80)]);
        assert_eq!(remaining, vec![span(0, 5), span(55, 58)]);
    }

    #[test]
    fn reconstructs_candidates_disjoint_and_exhaustive() {
        let containers = vec![span(10, 40), span(50, 90)];
        let candidates = vec![
            span(0, 3),
            span(12, 20),
            span(22, 38),
            span(45, 48),
            span(60, 70),
            span(95, 99),
        ];
        let (contained, remaining) = partition(&candidates, &containers);
        assert_eq!(contained.len() + remaining.len(), candidates.len());

        // merging the halves back in start-byte order restores the input
        let mut merged = candidates.clone();
        merged.retain(|c| contained.contains(c) || remaining.contains(c));
        assert_eq!(merged, candidates);
        for c in &contained {
            assert!(!remaining.contains(c));
        }
    }

    #[test]
    fn empty_containers_leave_everything_remaining() {
        let candidates = vec![span(1, 2), span(3, 4)];
        let (contained, remaining) = partition(&candidates, &[]);
        assert!(contained.is_empty());
        assert_eq!(remaining, candidates);
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        let containers = vec![span(0, 100)];
        let (contained, remaining) = partition(&[], &containers);
        assert!(contained.is_empty());
        assert!(remaining.is_empty());
    }

    #[test]
    fn trailing_candidates_after_last_container() {
        let containers = vec![span(0, 10)];
        let candidates = vec![span(2, 8), span(20, 25), span(30, 35)];
        let (contained, remaining) = partition(&candidates, &containers);
        assert_eq!(contained, vec![span(2, 8)]);
        assert_eq!(remaining, vec![span(20, 25), span(30, 35)]);
    }
}
