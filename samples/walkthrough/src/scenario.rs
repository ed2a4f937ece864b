//! The scripted session.
//!
//! Builds a list through every mutator in turn and records the rendering
//! after each stage, then derives a mapped list and an offset lookup.

use cowlink::ListError;
use cowlink::sequence::CowList;

use crate::config::WalkthroughConfig;

/// Errors that abort a walkthrough run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// A positional edit was handed a position the list no longer holds.
    #[error(transparent)]
    List(#[from] ListError),
    /// A stage needed a first or last node but the list was empty.
    #[error("stage `{stage}` needs a non-empty list")]
    EmptyList {
        /// The stage that found the list empty.
        stage: &'static str,
    },
}

/// One recorded stage of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    /// What was done.
    pub label: &'static str,
    /// `Display` rendering of the list afterwards.
    pub rendering: String,
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Renderings after each mutating stage, in order.
    pub stages: Vec<Stage>,
    /// Rendering of a copy taken before the end removals, read after them.
    pub snapshot: String,
    /// Values returned by the removal stages, in order.
    pub removed: Vec<Option<i32>>,
    /// The final list mapped through the configured suffix.
    pub mapped: Vec<String>,
    /// Value found at the configured offset from the end, if any.
    pub offset_value: Option<i32>,
}

/// Replays the session.
///
/// # Errors
///
/// Returns `ScenarioError` if a positional edit is rejected or a stage finds
/// the list unexpectedly empty. Neither happens with the stock script.
pub fn run(config: &WalkthroughConfig) -> Result<Report, ScenarioError> {
    let mut list = CowList::new();
    let mut stages = Vec::new();
    let mut removed = Vec::new();
    let mut record = |label, list: &CowList<i32>| {
        stages.push(Stage {
            label,
            rendering: list.to_string(),
        });
    };

    for value in (1..=6).rev() {
        list.insert_first(value);
    }
    record("insert_first 6..1", &list);

    for value in 7..=9 {
        list.append(value);
    }
    record("append 7..9", &list);

    let last = list.last().ok_or(ScenarioError::EmptyList { stage: "insert after last" })?;
    list.insert_after(10, last)?;
    let first = list.first().ok_or(ScenarioError::EmptyList { stage: "insert after first" })?;
    list.insert_after(666, first)?;
    record("insert_after last, first", &list);

    let last = list.last().ok_or(ScenarioError::EmptyList { stage: "remove after last" })?;
    removed.push(list.remove_after(last)?);
    let first = list.first().ok_or(ScenarioError::EmptyList { stage: "remove after first" })?;
    removed.push(list.remove_after(first)?);
    record("remove_after last, first", &list);

    let snapshot = list.clone();
    removed.push(list.remove_first());
    removed.push(list.remove_last());
    record("remove_first, remove_last", &list);

    let mapped = list
        .map(|value| format!("{value}{}", config.map_suffix))
        .into_iter()
        .collect();

    let offset_value = list
        .offset(list.end(), config.offset)
        .and_then(|cursor| list.value_at(cursor).copied());

    Ok(Report {
        stages,
        snapshot: snapshot.to_string(),
        removed,
        mapped,
        offset_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_stock_session() {
        let report = run(&WalkthroughConfig::default()).unwrap();
        let renderings: Vec<&str> = report
            .stages
            .iter()
            .map(|stage| stage.rendering.as_str())
            .collect();

        assert_eq!(
            renderings,
            vec![
                "1 -> 2 -> 3 -> 4 -> 5 -> 6",
                "1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 8 -> 9",
                "1 -> 666 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 8 -> 9 -> 10",
                "1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 8 -> 9 -> 10",
                "2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 8 -> 9",
            ]
        );
        assert_eq!(
            report.snapshot,
            "1 -> 2 -> 3 -> 4 -> 5 -> 6 -> 7 -> 8 -> 9 -> 10"
        );
        assert_eq!(report.removed, vec![None, Some(666), Some(1), Some(10)]);
        assert_eq!(
            report.mapped,
            vec!["20", "30", "40", "50", "60", "70", "80", "90"]
        );
        assert_eq!(report.offset_value, Some(5));
    }

    #[rstest]
    #[case(-1, Some(9))]
    #[case(-8, Some(2))]
    #[case(-9, None)]
    #[case(0, None)]
    #[case(1, None)]
    fn test_offset_from_end(#[case] offset: isize, #[case] expected: Option<i32>) {
        let config = WalkthroughConfig {
            offset,
            ..WalkthroughConfig::default()
        };
        assert_eq!(run(&config).unwrap().offset_value, expected);
    }

    #[rstest]
    fn test_map_suffix_is_applied() {
        let config = WalkthroughConfig {
            map_suffix: "!".to_string(),
            ..WalkthroughConfig::default()
        };
        assert_eq!(run(&config).unwrap().mapped.first().map(String::as_str), Some("2!"));
    }
}
