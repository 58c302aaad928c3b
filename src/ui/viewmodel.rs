//! View model types representing the renderable comparison.
//!
//! A [`ComparisonView`] is computed from a [`LayoutPlan`] and the active
//! theme. It holds display-ready strings only: values already joined, missing
//! attributes already replaced by the placeholder, chip colors already looked
//! up. Components turn it into markup without further decisions.

use crate::domain::CatalogRecord;
use crate::engine::{GroupKind, LayoutPlan, RowGroup};
use crate::ui::theme::Theme;

/// Complete view model for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonView {
    /// At least one slot is unset; only the empty message is shown.
    Empty(EmptyState),
    /// Both slots are set.
    Table(TableView),
}

impl ComparisonView {
    /// Builds the view for a layout plan.
    #[must_use]
    pub fn from_plan(plan: &LayoutPlan<'_>, theme: &Theme, empty_message: &str) -> Self {
        match plan {
            LayoutPlan::Empty => Self::Empty(EmptyState {
                message: empty_message.to_string(),
            }),
            LayoutPlan::Comparison { left, right, groups } => Self::Table(TableView {
                header: [HeaderCell::from_record(left), HeaderCell::from_record(right)],
                rows: groups
                    .iter()
                    .map(|group| RowView {
                        cells: [
                            CellView::build(left, group, theme),
                            CellView::build(right, group, theme),
                        ],
                    })
                    .collect(),
            }),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

/// Message shown while the comparison is incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

/// Header row plus one row per layout group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub header: [HeaderCell; 2],
    pub rows: Vec<RowView>,
}

/// Logo link for one selected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub name: String,
    pub link_url: String,
    pub logo_path: String,
}

impl HeaderCell {
    fn from_record(record: &CatalogRecord) -> Self {
        Self {
            name: record.name().to_string(),
            link_url: record.link_url().to_string(),
            logo_path: record.logo_path().to_string(),
        }
    }
}

/// One comparison row: the left cell and the right cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub cells: [CellView; 2],
}

/// How the fields of a cell share its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellLayout {
    /// A single field spanning the whole cell.
    FullWidth,
    /// `n` equal-width sub-columns, one per field.
    Columns(usize),
}

/// One record's side of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub layout: CellLayout,
    pub fields: Vec<FieldView>,
}

impl CellView {
    fn build(record: &CatalogRecord, group: &RowGroup, theme: &Theme) -> Self {
        let layout = if group.is_singleton() {
            CellLayout::FullWidth
        } else {
            CellLayout::Columns(group.keys.len())
        };

        let fields = group
            .keys
            .iter()
            .map(|key| FieldView {
                label: key.clone(),
                value: FieldValue::resolve(record, key, group.kind, theme),
            })
            .collect();

        Self { layout, fields }
    }
}

/// Label and value of one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: String,
    pub value: FieldValue,
}

/// Display form of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain text; lists are already `", "`-joined.
    Text(String),
    /// One colored chip per action.
    Chips(Vec<Chip>),
    /// The record lacks the attribute; rendered as [`crate::domain::PLACEHOLDER`].
    Missing,
}

impl FieldValue {
    fn resolve(record: &CatalogRecord, key: &str, kind: GroupKind, theme: &Theme) -> Self {
        let Some(value) = record.get(key) else {
            tracing::trace!(record = %record.name(), key = %key, "attribute missing, using placeholder");
            return Self::Missing;
        };

        match kind {
            GroupKind::Actions => Self::Chips(
                value
                    .items()
                    .into_iter()
                    .map(|action| Chip {
                        label: action.to_string(),
                        background: theme.action_color(action).to_string(),
                        text: theme.colors.chip_text.clone(),
                    })
                    .collect(),
            ),
            GroupKind::Attributes => Self::Text(value.display()),
        }
    }
}

/// A colored action label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub background: String,
    pub text: String,
}
