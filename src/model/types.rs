//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use std::time::Instant;

use crate::api::{Breadcrumb, FileUpdate, ImageBlob, Item, PLACEHOLDER_IMAGE};
use crate::logic::item_type::{derive_item_type, type_label};
use crate::logic::path::{image_src, normalize_path};

/// Focusable panes of the browser window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Tree,
    Breadcrumbs,
    Grid,
}

/// A configured root folder shown in the folder tree
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct TreeEntry {
    pub name: String,
    pub path: String,
}

/// What a card shows in its icon slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardKind {
    Folder,
    Image {
        src: String,
        fallback: &'static str,
    },
    Other {
        label: String,
    },
}

/// What happens when a card is activated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Navigate,
    Edit,
}

/// Render model for a single item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub path: String,
    pub kind: CardKind,
    pub action: CardAction,
    pub tags: Option<String>,
    pub description: Option<String>,
}

impl Card {
    fn with_type(item: &Item, item_type: &str, action: CardAction) -> Self {
        let path = normalize_path(&item.path);
        let kind = match item_type {
            "folder" => CardKind::Folder,
            "image" => CardKind::Image {
                src: image_src(&path),
                fallback: PLACEHOLDER_IMAGE,
            },
            other => CardKind::Other {
                label: type_label(other),
            },
        };
        let name = if item.name.is_empty() {
            crate::logic::path::file_name(&path).to_string()
        } else {
            item.name.clone()
        };

        Self {
            name,
            path,
            kind,
            action,
            tags: item.tags.clone(),
            description: item.description.clone(),
        }
    }

    /// Card for an entry of a folder listing: folders navigate, the rest edit
    pub fn from_listing(item: &Item) -> Self {
        let action = if item.is_folder() {
            CardAction::Navigate
        } else {
            CardAction::Edit
        };
        Self::with_type(item, &item.item_type, action)
    }

    /// Card for a search hit: type comes from the path, every card edits
    pub fn from_search(item: &Item) -> Self {
        let item_type = derive_item_type(&item.path);
        Self::with_type(item, &item_type, CardAction::Edit)
    }

    /// Icon text: `FOLDER`, `IMAGE` or the uppercased type
    pub fn icon(&self) -> &str {
        match &self.kind {
            CardKind::Folder => "FOLDER",
            CardKind::Image { .. } => "IMAGE",
            CardKind::Other { label } => label,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, CardKind::Image { .. })
    }
}

/// Contents of the item grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridView {
    /// Nothing requested yet
    Placeholder(String),
    Loading,
    /// Informational message (empty folder, no results)
    Message(String),
    /// Load failure or server-provided error
    Error(String),
    Cards(Vec<Card>),
}

impl GridView {
    pub fn cards(&self) -> &[Card] {
        match self {
            GridView::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// Contents of the breadcrumb bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BreadcrumbBar {
    Empty,
    /// Ancestry of the current folder; the last crumb is the current marker
    Trail(Vec<Breadcrumb>),
    /// Static marker shown while search results are displayed
    SearchResults,
}

impl BreadcrumbBar {
    pub fn crumbs(&self) -> &[Breadcrumb] {
        match self {
            BreadcrumbBar::Trail(crumbs) => crumbs,
            _ => &[],
        }
    }
}

/// Field of the edit form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    Name,
    Tags,
    Description,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            EditField::Name => EditField::Tags,
            EditField::Tags => EditField::Description,
            EditField::Description => EditField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditField::Name => EditField::Description,
            EditField::Tags => EditField::Name,
            EditField::Description => EditField::Tags,
        }
    }
}

/// Edit modal state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditModalState {
    pub path: String,
    pub name: String,
    pub tags: String,
    pub description: String,
    pub focused: EditField,
    /// Request id of the submit in flight, if any
    pub submitting: Option<u64>,
}

impl EditModalState {
    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Tags => &self.tags,
            EditField::Description => &self.description,
        }
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            EditField::Name => &mut self.name,
            EditField::Tags => &mut self.tags,
            EditField::Description => &mut self.description,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

/// Brief pop-up message
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub shown_at: Instant,
}

/// Backend call produced by a state transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    ListFolder {
        request_id: u64,
        path: String,
    },
    Search {
        request_id: u64,
        query: String,
    },
    UpdateFile {
        request_id: u64,
        path: String,
        update: FileUpdate,
    },
    UploadImage {
        folder: String,
        blob: ImageBlob,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, path: &str, item_type: &str) -> Item {
        Item {
            name: name.to_string(),
            path: path.to_string(),
            item_type: item_type.to_string(),
            tags: Some("untagged".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_listing_card_kinds() {
        let folder = Card::from_listing(&item("sub", "root\\sub", "folder"));
        assert_eq!(folder.kind, CardKind::Folder);
        assert_eq!(folder.action, CardAction::Navigate);
        assert_eq!(folder.path, "root/sub");
        assert_eq!(folder.icon(), "FOLDER");

        let image = Card::from_listing(&item("x.jpg", "root/x.jpg", "image"));
        assert_eq!(
            image.kind,
            CardKind::Image {
                src: "/files/root/x.jpg".to_string(),
                fallback: "/static/placeholder.jpg",
            }
        );
        assert_eq!(image.action, CardAction::Edit);

        let pdf = Card::from_listing(&item("r.pdf", "root/r.pdf", "pdf"));
        assert_eq!(pdf.icon(), "PDF");
        assert_eq!(pdf.action, CardAction::Edit);
    }

    #[test]
    fn test_search_card_derives_type() {
        let card = Card::from_search(&item("x.PNG", "photos/x.PNG", ""));
        assert!(card.is_image());
        assert_eq!(card.action, CardAction::Edit);

        let folder_hit = Card::from_search(&item("sub", "photos/sub", "folder"));
        assert_eq!(folder_hit.icon(), "UNKNOWN");
        assert_eq!(folder_hit.action, CardAction::Edit);
    }

    #[test]
    fn test_card_name_falls_back_to_path() {
        let card = Card::from_search(&item("", "photos/x.png", ""));
        assert_eq!(card.name, "x.png");
    }

    #[test]
    fn test_edit_field_cycle() {
        assert_eq!(EditField::Name.next(), EditField::Tags);
        assert_eq!(EditField::Description.next(), EditField::Name);
        assert_eq!(EditField::Name.prev(), EditField::Description);
    }
}
