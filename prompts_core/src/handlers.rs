//! Response builders, one per trigger.
//!
//! Every builder is a pure function of the request. The only session write
//! is the `prompt_option` type override set by `list` and `collection`.

use std::sync::OnceLock;

use regex::Regex;

use crate::content::{
    Card, ContentBlock, HorizontalAlignment, Image, Media, MediaControl, MediaImage, MediaObject,
    MediaType, Selection, Simple, Table, TableCell, TableColumn, TableRow,
};
use crate::session::{EntryDisplay, SelectableItem, SessionState, TypeOverride};
use crate::trigger::{MediaStatus, Request};
use crate::{Error, Result};

/// Entity type that list and collection items are resolved through.
pub const PROMPT_OPTION: &str = "prompt_option";

pub const LOGO_URL: &str = "https://developers.google.com/assistant/assistant_96.png";
pub const LOGO_ALT: &str = "Google Assistant logo";
pub const MEDIA_URL: &str = "https://actions.google.com/sounds/v1/cartoon/cartoon_boing.ogg";

const ORDINALS: [&str; 4] = ["First", "Second", "Third", "Fourth"];

static OPTION_KEY: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn option_key() -> &'static Regex {
    OPTION_KEY.get_or_init(|| {
        Regex::new(r"^[A-Z0-9]+(?:_[A-Z0-9]+)*$")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Signature shared by every response builder.
pub type Handler = fn(&Request, &mut SessionState) -> Result<Vec<ContentBlock>>;

#[must_use]
pub fn logo() -> Image {
    Image::new(LOGO_URL, LOGO_ALT)
}

fn item_keys() -> impl Iterator<Item = String> {
    (1..=ORDINALS.len()).map(|n| format!("ITEM_{n}"))
}

/// The four selectable items shown by `list` and `collection`.
#[must_use]
pub fn option_items() -> Vec<SelectableItem> {
    ORDINALS
        .iter()
        .zip(item_keys())
        .enumerate()
        .map(|(i, (ordinal, key))| {
            let n = i + 1;
            SelectableItem {
                key,
                synonyms: vec![format!("Item {n}"), format!("{ordinal} item")],
                display: EntryDisplay {
                    title: format!("Item #{n}"),
                    description: format!("Description of Item #{n}"),
                    image: Some(logo()),
                },
            }
        })
        .collect()
}

fn override_prompt_option(session: &mut SessionState) -> Result<()> {
    session.set_type_override(TypeOverride::replace(PROMPT_OPTION, option_items())?);
    Ok(())
}

pub fn simple(_: &Request, _: &mut SessionState) -> Result<Vec<ContentBlock>> {
    Ok(vec![
        ContentBlock::Simple(Simple::new(
            "This is the first simple response.",
            "This is the 1st simple response.",
        )),
        ContentBlock::from("This is the last simple response."),
    ])
}

pub fn image(_: &Request, _: &mut SessionState) -> Result<Vec<ContentBlock>> {
    Ok(vec![
        ContentBlock::from("This is an image prompt!"),
        ContentBlock::Image(logo()),
    ])
}

pub fn card(_: &Request, _: &mut SessionState) -> Result<Vec<ContentBlock>> {
    Ok(vec![
        ContentBlock::from("This is a card."),
        ContentBlock::Card(Card {
            title: "Card Title".to_string(),
            subtitle: "Card Subtitle".to_string(),
            text: "Card Content".to_string(),
            image: Some(logo()),
        }),
    ])
}

pub fn table(_: &Request, _: &mut SessionState) -> Result<Vec<ContentBlock>> {
    const COLUMNS: [&str; 3] = ["A", "B", "C"];

    let columns = COLUMNS
        .iter()
        .map(|c| TableColumn {
            header: format!("Column {c}"),
            align: HorizontalAlignment::Unspecified,
        })
        .collect();
    let rows = (1..=3)
        .map(|row| TableRow {
            cells: COLUMNS
                .iter()
                .map(|c| TableCell {
                    text: format!("{c}{row}"),
                })
                .collect(),
            divider: false,
        })
        .collect();

    Ok(vec![
        ContentBlock::from("This is a table."),
        ContentBlock::Table(Table {
            title: "Table Title".to_string(),
            subtitle: "Table Subtitle".to_string(),
            image: Some(logo()),
            columns,
            rows,
        }),
    ])
}

pub fn collection(_: &Request, session: &mut SessionState) -> Result<Vec<ContentBlock>> {
    override_prompt_option(session)?;
    Ok(vec![
        ContentBlock::from("This is a collection."),
        ContentBlock::Collection(Selection::new(
            "Collection Title",
            "Collection subtitle",
            item_keys(),
        )),
    ])
}

pub fn list(_: &Request, session: &mut SessionState) -> Result<Vec<ContentBlock>> {
    override_prompt_option(session)?;
    Ok(vec![
        ContentBlock::from("This is a list."),
        ContentBlock::List(Selection::new("List title", "List subtitle", item_keys())),
    ])
}

/// Turn an option key into its spoken form, e.g. `ITEM_1` into `item #1`.
#[must_use]
pub fn describe_selection(key: &str) -> String {
    key.to_lowercase().replace('_', " #")
}

pub fn option(request: &Request, _: &mut SessionState) -> Result<Vec<ContentBlock>> {
    let key = request
        .selection
        .as_deref()
        .ok_or(Error::MissingParameter(PROMPT_OPTION))?;
    if !option_key().is_match(key) {
        return Err(Error::InvalidSelection(key.to_string()));
    }

    Ok(vec![ContentBlock::from(format!(
        "You selected {}.",
        describe_selection(key)
    ))])
}

pub fn media(_: &Request, _: &mut SessionState) -> Result<Vec<ContentBlock>> {
    Ok(vec![
        ContentBlock::from("This is a media response"),
        ContentBlock::Media(Media {
            media_type: MediaType::Audio,
            start_offset: None,
            optional_media_controls: vec![MediaControl::Paused, MediaControl::Stopped],
            media_objects: vec![MediaObject {
                name: "Media name".to_string(),
                description: "Media description".to_string(),
                url: MEDIA_URL.to_string(),
                image: Some(MediaImage::Large(logo())),
            }],
        }),
    ])
}

pub fn media_status(request: &Request, _: &mut SessionState) -> Result<Vec<ContentBlock>> {
    let block = match request.media_status.as_ref() {
        Some(MediaStatus::Finished) => ContentBlock::from("Media has finished playing."),
        Some(MediaStatus::Failed) => ContentBlock::from("Media has failed."),
        Some(MediaStatus::Paused | MediaStatus::Stopped) => {
            ContentBlock::Media(Media::status_ack())
        }
        Some(MediaStatus::Unspecified(_)) | None => {
            ContentBlock::from("Unknown media status received.")
        }
    };
    Ok(vec![block])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::Trigger;

    fn run(handler: Handler, request: &Request) -> (Vec<ContentBlock>, SessionState) {
        let mut session = SessionState::new("test");
        let blocks = handler(request, &mut session).unwrap();
        (blocks, session)
    }

    #[test]
    fn test_option_items() {
        let items = option_items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[2].key, "ITEM_3");
        assert_eq!(items[2].synonyms, vec!["Item 3", "Third item"]);
        assert_eq!(items[2].display.title, "Item #3");
        assert_eq!(items[2].display.description, "Description of Item #3");
        assert_eq!(items[2].display.image, Some(logo()));
    }

    #[test]
    fn test_table_layout() {
        let (blocks, _) = run(table, &Request::new(Trigger::Table));
        let ContentBlock::Table(table) = &blocks[1] else {
            panic!("expected a table, got {:?}", blocks[1]);
        };
        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.columns[0].header, "Column A");
        assert!(
            table
                .columns
                .iter()
                .all(|c| c.align == HorizontalAlignment::Unspecified)
        );
        assert_eq!(table.rows.len(), 3);
        assert!(table.rows.iter().all(|r| r.cells.len() == 3 && !r.divider));
        assert_eq!(table.cell(0, 0), Some("A1"));
        assert_eq!(table.cell(1, 1), Some("B2"));
        assert_eq!(table.cell(2, 2), Some("C3"));
    }

    #[test]
    fn test_list_writes_override() {
        let (blocks, session) = run(list, &Request::new(Trigger::List));
        assert_eq!(blocks[0], ContentBlock::from("This is a list."));
        let ContentBlock::List(selection) = &blocks[1] else {
            panic!("expected a list, got {:?}", blocks[1]);
        };
        assert_eq!(
            selection.keys().collect::<Vec<_>>(),
            vec!["ITEM_1", "ITEM_2", "ITEM_3", "ITEM_4"]
        );
        assert_eq!(session.type_overrides.len(), 1);
        assert_eq!(session.type_overrides[0].name, PROMPT_OPTION);
    }

    #[test]
    fn test_collection_titles() {
        let (blocks, session) = run(collection, &Request::new(Trigger::Collection));
        let ContentBlock::Collection(selection) = &blocks[1] else {
            panic!("expected a collection, got {:?}", blocks[1]);
        };
        assert_eq!(selection.title, "Collection Title");
        assert_eq!(selection.subtitle, "Collection subtitle");
        assert_eq!(session.resolve(PROMPT_OPTION, "Fourth item"), Some("ITEM_4"));
    }

    #[test]
    fn test_describe_selection() {
        assert_eq!(describe_selection("ITEM_1"), "item #1");
        assert_eq!(describe_selection("BIG_ITEM_12"), "big #item #12");
    }

    #[test]
    fn test_option_requires_selection() {
        let mut session = SessionState::default();
        let err = option(&Request::new(Trigger::Option), &mut session).unwrap_err();
        assert!(matches!(err, Error::MissingParameter(PROMPT_OPTION)));
    }

    #[test]
    fn test_option_rejects_malformed_key() {
        let mut session = SessionState::default();
        for key in ["", "item_1", "ITEM__1", "ITEM 1", "_ITEM"] {
            let request = Request::new(Trigger::Option).with_selection(key);
            let err = option(&request, &mut session).unwrap_err();
            assert!(matches!(err, Error::InvalidSelection(_)), "key {key:?}");
        }
    }

    #[test]
    fn test_media_status_branches() {
        let request =
            |status: &str| Request::new(Trigger::MediaStatus).with_media_status(MediaStatus::parse(status));

        let (blocks, _) = run(media_status, &request("FAILED"));
        assert_eq!(blocks, vec![ContentBlock::from("Media has failed.")]);

        let (blocks, _) = run(media_status, &request("STOPPED"));
        assert_eq!(blocks, vec![ContentBlock::Media(Media::status_ack())]);

        let (blocks, _) = run(media_status, &Request::new(Trigger::MediaStatus));
        assert_eq!(blocks, vec![ContentBlock::from("Unknown media status received.")]);
    }
}
