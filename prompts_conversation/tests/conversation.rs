//! End-to-end conversations driven through the simulator.
//!
//! Each scenario invokes the Action, sends one or two queries, checks the
//! spoken and displayed output plus the rich content, then stops.

use prompts_conversation::{
    CANCEL_INTENT, ConversationConfig, ConversationSimulator, LocalFulfillment, MAIN_INTENT,
    PROMPTS_SCENE,
};
use prompts_core::content::{HorizontalAlignment, MediaControl, MediaImage, MediaType};
use prompts_core::webhook::PromptContent;

const TRIGGER_PHRASE: &str = "Talk to Prompt Demo";
const CONTINUE_CONVO_PROMPT: &str = "I can show you basic cards, lists, and more on your phone and smart display. What would you like to see?";
const LOGO_URL: &str = "https://developers.google.com/assistant/assistant_96.png";
const LOGO_ALT: &str = "Google Assistant logo";

async fn start_conversation() -> ConversationSimulator<LocalFulfillment> {
    start_conversation_on("PHONE").await
}

async fn start_conversation_on(surface: &str) -> ConversationSimulator<LocalFulfillment> {
    let config = ConversationConfig::default()
        .with_trigger_phrase(TRIGGER_PHRASE)
        .with_surface(surface);
    let mut sim = ConversationSimulator::new(LocalFulfillment, config);

    let turn = sim.send_query(TRIGGER_PHRASE).await.unwrap();
    assert_eq!(turn.speech, CONTINUE_CONVO_PROMPT);
    assert_eq!(turn.text, CONTINUE_CONVO_PROMPT);
    assert_eq!(turn.intent, MAIN_INTENT);
    assert_eq!(turn.scene, PROMPTS_SCENE);
    sim
}

fn stop(sim: &mut ConversationSimulator<LocalFulfillment>) {
    let turn = sim.send_stop().unwrap();
    assert_eq!(turn.intent, CANCEL_INTENT);
    assert!(turn.ended);
}

#[tokio::test]
async fn trigger_only() {
    let mut sim = start_conversation_on("SMART_DISPLAY").await;
    stop(&mut sim);
}

#[tokio::test]
async fn display_simple() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("Simple").await.unwrap();

    assert_eq!(
        turn.speech,
        format!(
            "This is the first simple response.This is the last simple response. {CONTINUE_CONVO_PROMPT}"
        )
    );
    assert!(turn.text.starts_with("This is "));
    assert!(turn.text.ends_with(&format!(" {CONTINUE_CONVO_PROMPT}")));
    assert_eq!(turn.intent, "simple");
    stop(&mut sim);
}

#[tokio::test]
async fn display_image() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("Image").await.unwrap();

    let expected = format!("This is an image prompt!{CONTINUE_CONVO_PROMPT}");
    assert_eq!(turn.speech, expected);
    assert_eq!(turn.text, expected);
    assert_eq!(turn.intent, "image");
    let Some(PromptContent::Image(image)) = turn.content() else {
        panic!("expected an image, got {:?}", turn.content());
    };
    assert_eq!(image.url, LOGO_URL);
    assert_eq!(image.alt, LOGO_ALT);
    stop(&mut sim);
}

#[tokio::test]
async fn display_card() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("Card").await.unwrap();

    let expected = format!("This is a card.{CONTINUE_CONVO_PROMPT}");
    assert_eq!(turn.speech, expected);
    assert_eq!(turn.text, expected);
    assert_eq!(turn.intent, "card");
    let Some(PromptContent::Card(card)) = turn.content() else {
        panic!("expected a card, got {:?}", turn.content());
    };
    assert_eq!(card.title, "Card Title");
    assert_eq!(card.subtitle, "Card Subtitle");
    assert_eq!(card.text, "Card Content");
    let image = card.image.as_ref().unwrap();
    assert_eq!((image.url.as_str(), image.height, image.width), (LOGO_URL, 0, 0));
    stop(&mut sim);
}

#[tokio::test]
async fn display_table() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("Table").await.unwrap();

    let expected = format!("This is a table.{CONTINUE_CONVO_PROMPT}");
    assert_eq!(turn.speech, expected);
    assert_eq!(turn.intent, "table");
    let Some(PromptContent::Table(table)) = turn.content() else {
        panic!("expected a table, got {:?}", turn.content());
    };
    assert_eq!(table.title, "Table Title");
    assert_eq!(table.subtitle, "Table Subtitle");
    let headers: Vec<_> = table.columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(headers, ["Column A", "Column B", "Column C"]);
    assert!(
        table
            .columns
            .iter()
            .all(|c| c.align == HorizontalAlignment::Unspecified)
    );
    for (r, row) in table.rows.iter().enumerate() {
        let cells: Vec<_> = row.cells.iter().map(|c| c.text.clone()).collect();
        let n = r + 1;
        assert_eq!(cells, [format!("A{n}"), format!("B{n}"), format!("C{n}")]);
        assert!(!row.divider);
    }
    stop(&mut sim);
}

#[tokio::test]
async fn display_list() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("List").await.unwrap();

    assert_eq!(turn.speech, "This is a list.");
    assert_eq!(turn.text, "This is a list.");
    assert_eq!(turn.intent, "list");
    let Some(PromptContent::List(list)) = turn.content() else {
        panic!("expected a list, got {:?}", turn.content());
    };
    assert_eq!(list.title, "List title");
    assert_eq!(list.subtitle, "List subtitle");
    assert_eq!(
        list.keys().collect::<Vec<_>>(),
        ["ITEM_1", "ITEM_2", "ITEM_3", "ITEM_4"]
    );
    stop(&mut sim);
}

#[tokio::test]
async fn display_collection() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("Collection").await.unwrap();

    assert_eq!(turn.speech, "This is a collection.");
    assert_eq!(turn.intent, "collection");
    let Some(PromptContent::Collection(collection)) = turn.content() else {
        panic!("expected a collection, got {:?}", turn.content());
    };
    assert_eq!(collection.title, "Collection Title");
    assert_eq!(collection.subtitle, "Collection subtitle");
    assert_eq!(collection.items.len(), 4);
    stop(&mut sim);
}

#[tokio::test]
async fn display_media() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("Media").await.unwrap();

    let expected = format!("This is a media response{CONTINUE_CONVO_PROMPT}");
    assert_eq!(turn.speech, expected);
    assert_eq!(turn.text, expected);
    assert_eq!(turn.intent, "media");
    let Some(PromptContent::Media(media)) = turn.content() else {
        panic!("expected media, got {:?}", turn.content());
    };
    assert_eq!(media.media_type, MediaType::Audio);
    assert_eq!(
        media.optional_media_controls,
        [MediaControl::Paused, MediaControl::Stopped]
    );
    let object = &media.media_objects[0];
    assert_eq!(object.name, "Media name");
    assert_eq!(object.description, "Media description");
    assert_eq!(
        object.url,
        "https://actions.google.com/sounds/v1/cartoon/cartoon_boing.ogg"
    );
    let Some(MediaImage::Large(image)) = &object.image else {
        panic!("expected a large image, got {:?}", object.image);
    };
    assert_eq!(image.alt, LOGO_ALT);
    stop(&mut sim);
}

#[tokio::test]
async fn media_status_updates() {
    let mut sim = start_conversation().await;
    sim.send_query("Media").await.unwrap();

    let turn = sim.send_media_status("PAUSED").await.unwrap();
    assert!(turn.speech.is_empty());
    let Some(PromptContent::Media(media)) = turn.content() else {
        panic!("expected a media ack, got {:?}", turn.content());
    };
    assert_eq!(media.media_type, MediaType::MediaStatusAck);
    assert_eq!(turn.intent, "actions.intent.MEDIA_STATUS_PAUSED");

    let turn = sim.send_media_status("FINISHED").await.unwrap();
    assert_eq!(
        turn.speech,
        format!("Media has finished playing.{CONTINUE_CONVO_PROMPT}")
    );

    let turn = sim.send_media_status("FAILED").await.unwrap();
    assert!(turn.speech.starts_with("Media has failed."));

    let turn = sim.send_media_status("STATUS_UNSPECIFIED").await.unwrap();
    assert!(turn.speech.starts_with("Unknown media status received."));
    stop(&mut sim);
}

#[tokio::test]
async fn select_list_item() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("List").await.unwrap();
    assert_eq!(turn.speech, "This is a list.");
    assert!(!turn.ended);

    let turn = sim.send_query("Item #1").await.unwrap();
    let expected = format!("You selected item #1.{CONTINUE_CONVO_PROMPT}");
    assert_eq!(turn.speech, expected);
    assert_eq!(turn.text, expected);
    assert_eq!(turn.scene, PROMPTS_SCENE);
    stop(&mut sim);
}

#[tokio::test]
async fn select_list_item_by_synonym() {
    let mut sim = start_conversation().await;
    sim.send_query("List").await.unwrap();

    let turn = sim.send_query("Item 1").await.unwrap();
    assert!(turn.text.starts_with("You selected item #1."));
    assert_eq!(sim.session().state.param_str("prompt_option"), Some("ITEM_1"));
    stop(&mut sim);
}

#[tokio::test]
async fn select_collection_item() {
    let mut sim = start_conversation().await;
    let turn = sim.send_query("Collection").await.unwrap();
    assert_eq!(turn.speech, "This is a collection.");
    assert!(!turn.ended);

    let turn = sim.send_query("Third item").await.unwrap();
    let expected = format!("You selected item #3.{CONTINUE_CONVO_PROMPT}");
    assert_eq!(turn.speech, expected);
    assert_eq!(turn.scene, PROMPTS_SCENE);
    stop(&mut sim);
}

#[tokio::test]
async fn select_again_while_override_active() {
    let mut sim = start_conversation().await;
    sim.send_query("List").await.unwrap();

    let turn = sim.send_query("Item 1").await.unwrap();
    assert!(turn.text.starts_with("You selected item #1."));
    assert!(sim.session().state.type_override("prompt_option").is_some());

    let turn = sim.send_query("Item 2").await.unwrap();
    assert_eq!(turn.intent, "option");
    assert!(turn.text.starts_with("You selected item #2."));
    stop(&mut sim);
}

#[tokio::test]
async fn select_after_other_trigger() {
    let mut sim = start_conversation().await;
    sim.send_query("List").await.unwrap();
    let turn = sim.send_query("Card").await.unwrap();
    assert_eq!(turn.intent, "card");

    let turn = sim.send_query("Item 3").await.unwrap();
    assert_eq!(turn.intent, "option");
    assert!(turn.text.starts_with("You selected item #3."));
    stop(&mut sim);
}

#[tokio::test]
async fn item_without_override_is_no_match() {
    let mut sim = start_conversation().await;
    assert!(sim.session().state.type_override("prompt_option").is_none());

    let turn = sim.send_query("Item 1").await.unwrap();
    assert_eq!(turn.intent, "actions.intent.NO_MATCH");
    stop(&mut sim);
}
