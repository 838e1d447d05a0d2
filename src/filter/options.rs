//! Fixed option lists offered by the filter modal.

/// One selectable option: what the user sees and the selector value it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// A titled group of options (one row of the modal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionGroup {
    pub title: &'static str,
    pub options: &'static [FilterOption],
}

pub const SORT_OPTIONS: OptionGroup = OptionGroup {
    title: "Sort by",
    options: &[
        FilterOption {
            label: "Relevance",
            value: "relevance",
        },
        FilterOption {
            label: "Rating",
            value: "rating",
        },
        FilterOption {
            label: "Review Count",
            value: "review_count",
        },
    ],
};

pub const CUISINE_OPTIONS: OptionGroup = OptionGroup {
    title: "Cuisines",
    options: &[
        FilterOption {
            label: "All",
            value: "all",
        },
        FilterOption {
            label: "Italian",
            value: "italian",
        },
        FilterOption {
            label: "Chinese",
            value: "chinese",
        },
        FilterOption {
            label: "Mexican",
            value: "mexican",
        },
    ],
};

pub const PRICE_OPTIONS: OptionGroup = OptionGroup {
    title: "Price Range",
    options: &[
        FilterOption {
            label: "All",
            value: "all",
        },
        FilterOption {
            label: "$",
            value: "$",
        },
        FilterOption {
            label: "$$",
            value: "$$",
        },
        FilterOption {
            label: "$$$",
            value: "$$$",
        },
        FilterOption {
            label: "$$$$",
            value: "$$$$",
        },
    ],
};

/// Modal rows in display order.
pub fn option_groups() -> [OptionGroup; 3] {
    [SORT_OPTIONS, CUISINE_OPTIONS, PRICE_OPTIONS]
}
