use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedReceiver;

use super::Session;
use crate::application::menus;
use crate::domain::models::Event;
use crate::domain::models::MenuBehavior;
use crate::domain::models::MenuEntry;
use crate::domain::models::Overlay;
use crate::domain::models::PersonaId;
use crate::domain::models::Sender;

fn session_fixture() -> (Session, UnboundedReceiver<Event>) {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let mut session = Session::new(tx);
    session.switch_persona(PersonaId::Samantha);
    return (session, rx);
}

async fn resolve_reply(session: &mut Session, rx: &mut UnboundedReceiver<Event>) {
    match rx.recv().await.unwrap() {
        Event::ReplyReady(message) => session.handle_reply(message),
        _ => panic!("Wrong enum"),
    }
}

mod submit {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_ignores_empty_input() {
        let (mut session, _rx) = session_fixture();
        session.submit();
        assert!(session.log.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn it_ignores_whitespace_only_input() {
        let (mut session, _rx) = session_fixture();
        session.composer = "   \t ".to_string();
        session.submit();
        assert!(session.log.is_empty());
        assert_eq!(session.overlays.active(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn it_appends_a_user_message_and_clears_the_composer() {
        let (mut session, _rx) = session_fixture();
        session.composer = "Hello".to_string();
        session.submit();

        assert_eq!(session.log.len(), 1);
        let message = &session.log.all()[0];
        assert_eq!(message.id, 1);
        assert_eq!(message.text, "Hello");
        assert_eq!(message.sender, Sender::User);
        assert!(session.composer.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn it_appends_the_reply_once_synthesis_resolves() {
        let (mut session, mut rx) = session_fixture();
        session.composer = "Hello".to_string();
        session.submit();
        resolve_reply(&mut session, &mut rx).await;

        assert_eq!(session.log.len(), 2);
        let reply = &session.log.all()[1];
        assert_eq!(reply.id, 2);
        assert_eq!(reply.sender, Sender::Persona(PersonaId::Samantha));
        assert!((80..=99).contains(&reply.confidence.unwrap()));
        assert_eq!(reply.thoughts.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn it_keeps_user_messages_in_call_order_with_increasing_ids() {
        let (mut session, mut rx) = session_fixture();
        for text in ["one", "two", "three"] {
            session.composer = text.to_string();
            session.submit();
        }
        for _ in 0..3 {
            resolve_reply(&mut session, &mut rx).await;
        }

        let user_messages = session
            .log
            .all()
            .iter()
            .filter(|m| return m.sender == Sender::User)
            .collect::<Vec<_>>();

        assert_eq!(user_messages.len(), 3);
        assert_eq!(user_messages[0].text, "one");
        assert_eq!(user_messages[1].text, "two");
        assert_eq!(user_messages[2].text, "three");
        assert!(user_messages[0].id < user_messages[1].id);
        assert!(user_messages[1].id < user_messages[2].id);
    }

    #[tokio::test(start_paused = true)]
    async fn it_resolves_overlapping_submissions_independently() {
        let (mut session, mut rx) = session_fixture();
        session.composer = "first".to_string();
        session.submit();
        session.composer = "second".to_string();
        session.submit();

        // Both replies land even though the second was submitted while the
        // first was still thinking.
        resolve_reply(&mut session, &mut rx).await;
        resolve_reply(&mut session, &mut rx).await;

        assert_eq!(session.log.len(), 4);
    }
}

mod settings_interception {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_opens_settings_without_appending() {
        let (mut session, _rx) = session_fixture();
        session.composer = "please open Settings".to_string();
        session.submit();

        assert!(session.log.is_empty());
        assert_eq!(session.overlays.active(), Some(Overlay::Settings));
        assert!(session.composer.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn it_matches_case_insensitively() {
        let (mut session, _rx) = session_fixture();
        session.composer = "SETTINGS".to_string();
        session.submit();

        assert!(session.log.is_empty());
        assert_eq!(session.overlays.active(), Some(Overlay::Settings));
    }

    #[tokio::test(start_paused = true)]
    async fn it_matches_the_dutch_spelling() {
        let (mut session, _rx) = session_fixture();
        session.composer = "open de instellingen".to_string();
        session.submit();

        assert!(session.log.is_empty());
        assert_eq!(session.overlays.active(), Some(Overlay::Settings));
    }

    #[tokio::test(start_paused = true)]
    async fn it_takes_precedence_over_other_overlays_and_personas() {
        let (mut session, _rx) = session_fixture();
        session.switch_persona(PersonaId::Claude);
        session.overlays.open(Overlay::Cooking);
        session.composer = "settings".to_string();
        session.submit();

        assert!(session.log.is_empty());
        assert_eq!(session.overlays.active(), Some(Overlay::Settings));
    }
}

mod personas {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_switches_the_active_persona_and_closes_the_picker() {
        let (mut session, _rx) = session_fixture();
        session.overlays.open(Overlay::PersonaPicker);
        session.switch_persona(PersonaId::Gemini);

        assert_eq!(session.active_persona, PersonaId::Gemini);
        assert_eq!(session.overlays.active(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn it_uses_the_new_persona_for_subsequent_syntheses() {
        let (mut session, mut rx) = session_fixture();
        session.switch_persona(PersonaId::Claude);
        session.composer = "Hello".to_string();
        session.submit();
        resolve_reply(&mut session, &mut rx).await;

        let reply = &session.log.all()[1];
        assert_eq!(reply.sender, Sender::Persona(PersonaId::Claude));
        assert!(reply.text.contains("Claude"));
    }

    #[tokio::test(start_paused = true)]
    async fn it_falls_back_to_the_default_persona_for_unknown_names() {
        let (mut session, _rx) = session_fixture();
        session.switch_persona(PersonaId::Mistral);
        session.switch_persona_by_name("hal9000");

        assert_eq!(session.active_persona, PersonaId::default_persona());
    }

    #[tokio::test(start_paused = true)]
    async fn it_switches_by_known_name() {
        let (mut session, _rx) = session_fixture();
        session.switch_persona_by_name("llama");
        assert_eq!(session.active_persona, PersonaId::Llama);
    }
}

mod menu_entries {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_stages_templated_text_and_closes_the_overlay() {
        let (mut session, _rx) = session_fixture();
        session.overlays.open(Overlay::QuickActions);

        let entries = menus::quick_actions();
        session.run_menu_entry(Overlay::QuickActions, &entries[0]);

        assert_eq!(session.composer, "Search for ");
        assert_eq!(session.overlays.active(), None);
        assert!(session.log.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn it_opens_another_overlay_from_the_tool_catalog() {
        let (mut session, _rx) = session_fixture();
        session.overlays.open(Overlay::ToolCatalog);

        let entry = MenuEntry {
            icon: "",
            name: "Cooking",
            description: "",
            behavior: MenuBehavior::OpenOverlay(Overlay::Cooking),
        };
        session.run_menu_entry(Overlay::ToolCatalog, &entry);

        assert_eq!(session.overlays.active(), Some(Overlay::Cooking));
    }

    #[tokio::test(start_paused = true)]
    async fn it_runs_the_integrations_shortcut_into_settings() {
        let (mut session, _rx) = session_fixture();
        session.overlays.open(Overlay::ToolCatalog);

        let entry = MenuEntry {
            icon: "",
            name: "Integrations",
            description: "",
            behavior: MenuBehavior::StageAndSubmit("Settings"),
        };
        session.run_menu_entry(Overlay::ToolCatalog, &entry);

        // The staged "Settings" text goes through submit and gets
        // intercepted, so nothing is appended.
        assert!(session.log.is_empty());
        assert_eq!(session.overlays.active(), Some(Overlay::Settings));
        assert!(session.composer.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn it_switches_persona_from_the_picker_entry() {
        let (mut session, _rx) = session_fixture();
        session.overlays.open(Overlay::PersonaPicker);

        let entry = MenuEntry {
            icon: "",
            name: "Gemini",
            description: "",
            behavior: MenuBehavior::SwitchPersona(PersonaId::Gemini),
        };
        session.run_menu_entry(Overlay::PersonaPicker, &entry);

        assert_eq!(session.active_persona, PersonaId::Gemini);
        assert_eq!(session.overlays.active(), None);
    }
}

mod cooking {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_ignores_a_blank_query() {
        let (mut session, _rx) = session_fixture();
        session.overlays.open(Overlay::Cooking);
        session.overlays.cooking_query = "   ".to_string();
        session.submit_cooking_search();

        assert!(session.log.is_empty());
        assert_eq!(session.overlays.active(), Some(Overlay::Cooking));
    }

    #[tokio::test(start_paused = true)]
    async fn it_submits_a_recipe_prompt_and_closes_the_overlay() {
        let (mut session, _rx) = session_fixture();
        session.overlays.open(Overlay::Cooking);
        session.overlays.cooking_query = "pasta".to_string();
        session.submit_cooking_search();

        assert_eq!(session.log.len(), 1);
        assert_eq!(session.log.all()[0].text, "Find me a recipe for pasta");
        assert_eq!(session.overlays.active(), None);
        assert!(session.overlays.cooking_query.is_empty());
        assert!(session.composer.is_empty());
    }
}

mod speech {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_tracks_the_listening_flag_across_a_capture() {
        let (mut session, _rx) = session_fixture();
        assert!(!session.listening);

        session.handle_speech_capture_started();
        assert!(session.listening);

        session.handle_speech_transcript("turn on the lights".to_string());
        assert!(!session.listening);
        assert_eq!(session.composer, "turn on the lights");

        session.handle_speech_capture_started();
        session.handle_speech_capture_ended();
        assert!(!session.listening);
    }
}

mod reset {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn it_clears_the_log_but_keeps_counting_ids() {
        let (mut session, _rx) = session_fixture();
        session.composer = "Hello".to_string();
        session.submit();
        session.reset();

        assert!(session.log.is_empty());
        assert!(session.composer.is_empty());

        session.composer = "Again".to_string();
        session.submit();
        assert_eq!(session.log.all()[0].id, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn it_toggles_dev_mode() {
        let (mut session, _rx) = session_fixture();
        assert!(!session.dev_mode);
        session.toggle_dev_mode();
        assert!(session.dev_mode);
        session.toggle_dev_mode();
        assert!(!session.dev_mode);
    }
}
