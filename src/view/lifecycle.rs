//! State transitions over a list of view configurations.
//!
//! Every operation takes the current list and returns a new one; the input is
//! never modified. A rejected operation returns an error and logs a warning.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::config::{
    ElevationViewConfig, ViewConfigIssue, ViewDirection, MAX_VIEWS_PER_DIRECTION,
};
use crate::error::{Result, ViewConfigError};

fn find_index(view_id: &str, views: &[ElevationViewConfig]) -> Result<usize> {
    views.iter().position(|v| v.id == view_id).ok_or_else(|| {
        warn!(view_id, "view not found");
        ViewConfigError::ViewNotFound(view_id.to_owned()).into()
    })
}

/// Whether another view for `direction` fits under the per-direction limit.
#[must_use]
pub fn can_duplicate(direction: ViewDirection, views: &[ElevationViewConfig]) -> bool {
    views.iter().filter(|v| v.direction == direction).count() < MAX_VIEWS_PER_DIRECTION
}

/// Views for `direction`, ordered by `sort_order`.
#[must_use]
pub fn views_for_direction(
    direction: ViewDirection,
    views: &[ElevationViewConfig],
) -> Vec<&ElevationViewConfig> {
    let mut matching: Vec<_> = views.iter().filter(|v| v.direction == direction).collect();
    matching.sort_by_key(|v| v.sort_order);
    matching
}

/// Appends a copy of `view_id` with a fresh id and label.
///
/// The copy keeps the source's hidden elements, is never a default, and sorts
/// after every existing view. Its id is `{direction}-dup{n}` for the smallest
/// `n` not already in use. A `sort_order` already at `i32::MAX` saturates
/// instead of wrapping.
///
/// # Errors
///
/// - `ViewConfigError::ViewNotFound` if no view has `view_id`.
/// - `ViewConfigError::NotDuplicable` for plan and 3D views.
/// - `ViewConfigError::DirectionFull` if the direction already has
///   [`MAX_VIEWS_PER_DIRECTION`] views.
pub fn duplicate_view(
    view_id: &str,
    views: &[ElevationViewConfig],
) -> Result<Vec<ElevationViewConfig>> {
    let source = &views[find_index(view_id, views)?];
    let direction = source.direction;

    if !direction.is_cardinal() {
        warn!(view_id, %direction, "only elevation views can be duplicated");
        return Err(ViewConfigError::NotDuplicable(direction).into());
    }
    if !can_duplicate(direction, views) {
        warn!(view_id, %direction, max = MAX_VIEWS_PER_DIRECTION, "direction is full");
        return Err(ViewConfigError::DirectionFull {
            direction,
            max: MAX_VIEWS_PER_DIRECTION,
        }
        .into());
    }

    let taken: HashSet<&str> = views.iter().map(|v| v.id.as_str()).collect();
    let (n, id) = (1..)
        .map(|n| (n, format!("{direction}-dup{n}")))
        .find(|(_, id)| !taken.contains(id.as_str()))
        .unwrap_or_default();
    // Appended last, so a stable sort keeps it after an equal order.
    let sort_order = views
        .iter()
        .map(|v| v.sort_order)
        .max()
        .unwrap_or(0)
        .saturating_add(1);

    let copy = ElevationViewConfig {
        id,
        direction,
        label: format!("{} ({n})", direction.title()),
        hidden_elements: source.hidden_elements.clone(),
        is_default: false,
        sort_order,
    };

    let mut next = views.to_vec();
    next.push(copy);
    Ok(next)
}

/// Removes a non-default view.
///
/// # Errors
///
/// Returns `ViewConfigError::ViewNotFound` for an unknown id and
/// `ViewConfigError::DefaultView` if the view is a default.
pub fn delete_view(
    view_id: &str,
    views: &[ElevationViewConfig],
) -> Result<Vec<ElevationViewConfig>> {
    let index = find_index(view_id, views)?;
    if views[index].is_default {
        warn!(view_id, "cannot delete default view");
        return Err(ViewConfigError::DefaultView(view_id.to_owned()).into());
    }
    let mut next = views.to_vec();
    next.remove(index);
    Ok(next)
}

/// Sets a view's label, trimmed of surrounding whitespace.
///
/// # Errors
///
/// Returns `ViewConfigError::ViewNotFound` for an unknown id and
/// `ViewConfigError::EmptyLabel` if the trimmed label is empty.
pub fn rename_view(
    view_id: &str,
    label: &str,
    views: &[ElevationViewConfig],
) -> Result<Vec<ElevationViewConfig>> {
    let index = find_index(view_id, views)?;
    let label = label.trim();
    if label.is_empty() {
        warn!(view_id, "label cannot be empty");
        return Err(ViewConfigError::EmptyLabel.into());
    }
    let mut next = views.to_vec();
    label.clone_into(&mut next[index].label);
    Ok(next)
}

/// Hides `element_id` in the view, or shows it again if already hidden.
///
/// # Errors
///
/// Returns `ViewConfigError::ViewNotFound` for an unknown id.
pub fn toggle_element_visibility(
    view_id: &str,
    element_id: &str,
    views: &[ElevationViewConfig],
) -> Result<Vec<ElevationViewConfig>> {
    let index = find_index(view_id, views)?;
    let mut next = views.to_vec();
    let hidden = &mut next[index].hidden_elements;
    if hidden.iter().any(|id| id == element_id) {
        hidden.retain(|id| id != element_id);
    } else {
        hidden.push(element_id.to_owned());
    }
    Ok(next)
}

/// Elements are visible unless hidden; an unknown view hides nothing.
#[must_use]
pub fn is_element_visible_in_view(
    element_id: &str,
    view_id: &str,
    views: &[ElevationViewConfig],
) -> bool {
    views
        .iter()
        .find(|v| v.id == view_id)
        .is_none_or(|v| !v.is_hidden(element_id))
}

/// Every broken invariant in `views`, empty when the list is consistent.
#[must_use]
pub fn validate_views(views: &[ElevationViewConfig]) -> Vec<ViewConfigIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for v in views {
        if !seen.insert(v.id.as_str()) && reported.insert(v.id.as_str()) {
            issues.push(ViewConfigIssue::DuplicateId(v.id.clone()));
        }
    }

    let mut per_direction: HashMap<ViewDirection, (usize, usize)> = HashMap::new();
    for v in views {
        let entry = per_direction.entry(v.direction).or_default();
        entry.0 += 1;
        if v.is_default {
            entry.1 += 1;
        }
    }

    for direction in ViewDirection::CARDINAL {
        let (count, defaults) = per_direction.get(&direction).copied().unwrap_or_default();
        if count > MAX_VIEWS_PER_DIRECTION {
            issues.push(ViewConfigIssue::TooManyViews { direction, count });
        }
        match defaults {
            0 => issues.push(ViewConfigIssue::MissingDefault(direction)),
            1 => {}
            count => issues.push(ViewConfigIssue::MultipleDefaults { direction, count }),
        }
    }

    issues
}

/// [`validate_views`] as a `Result`.
///
/// # Errors
///
/// Returns `ViewConfigError::Invalid` carrying every issue found.
pub fn ensure_valid_views(views: &[ElevationViewConfig]) -> Result<()> {
    let issues = validate_views(views);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ViewConfigError::Invalid(issues).into())
    }
}
