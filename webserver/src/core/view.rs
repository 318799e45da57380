//! Projection of forum state into the page view model

use shared::{Freelancer, ForumView, RowView, SummaryView};

use super::state::ForumState;

/// Build the full page description for the current state
///
/// Pure: the same state always yields an equal view.
pub fn render(state: &ForumState) -> ForumView {
    let summary = SummaryView::new(state.average_rate().to_string(), state.len());
    let rows = state.freelancers().iter().map(row_view).collect();
    ForumView::new(summary, rows)
}

pub fn row_view(freelancer: &Freelancer) -> RowView {
    RowView {
        name: freelancer.name.clone(),
        occupation: freelancer.occupation.clone(),
        rate: freelancer.formatted_rate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn known_state() -> ForumState {
        ForumState::from_records(
            RecordGenerator::default(),
            vec![
                Freelancer::new("Alice", "Writer", 30),
                Freelancer::new("Bob", "Programmer", 100),
                Freelancer::new("Carol", "Designer", 65),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rows_follow_records() {
        let view = render(&known_state());

        assert_eq!(view.row_count(), 3);
        assert_eq!(view.rows[0].cells(), ["Alice", "Writer", "$30/hr"]);
        assert_eq!(view.rows[1].cells(), ["Bob", "Programmer", "$100/hr"]);
        assert_eq!(view.rows[2].cells(), ["Carol", "Designer", "$65/hr"]);
    }

    #[test]
    fn test_summary_reflects_average_and_count() {
        let view = render(&known_state());
        assert_eq!(view.summary.average, "65.00");
        assert_eq!(view.summary.count, 3);
        assert_eq!(view.summary.headline, "Average Starting Rate: $65.00/hr");
        assert_eq!(view.summary.detail, "Based on 3 freelancers");
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = known_state();
        let first = render(&state);
        let second = render(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_after_append_reflects_new_state() {
        let mut state = known_state();
        let before = render(&state);

        let mut rng = StdRng::seed_from_u64(2);
        let added = state.append_generated(&mut rng).clone();
        let after = render(&state);

        assert_eq!(after.row_count(), before.row_count() + 1);
        assert_eq!(after.rows[..3], before.rows[..]);
        assert_eq!(after.rows[3], row_view(&added));
        assert_eq!(after.summary.count, 4);
        assert_eq!(after.summary.average, state.average_rate().to_string());
    }

    #[test]
    fn test_empty_state() {
        let view = render(&ForumState::new(RecordGenerator::default()));
        assert_eq!(view.row_count(), 0);
        assert_eq!(view.summary.headline, "Average Starting Rate: $0/hr");
    }
}
