//! Navigation states of the interactive session.

/// One entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    AddRepair,
    UpdateRepair,
    DeleteRepair,
    ViewRepair,
    Exit,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 5] = [
        Page::AddRepair,
        Page::UpdateRepair,
        Page::DeleteRepair,
        Page::ViewRepair,
        Page::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AddRepair => "Add Repair",
            Self::UpdateRepair => "Update Repair",
            Self::DeleteRepair => "Delete Repair",
            Self::ViewRepair => "View Repair",
            Self::Exit => "Exit",
        }
    }

    /// Heading printed when the page is entered; `Exit` has none.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Self::AddRepair => Some("Add Repair Request"),
            Self::UpdateRepair => Some("Update Repair Request"),
            Self::DeleteRepair => Some("Delete Repair Request"),
            Self::ViewRepair => Some("View Repair Requests"),
            Self::Exit => None,
        }
    }

    pub fn labels() -> [&'static str; 5] {
        Self::ALL.map(Page::label)
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn menu_offers_exactly_five_labelled_options() {
        assert_eq!(
            Page::labels(),
            [
                "Add Repair",
                "Update Repair",
                "Delete Repair",
                "View Repair",
                "Exit"
            ]
        );
    }
}
