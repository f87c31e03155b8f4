use chatpanel_core::auth::key::PUBLISHABLE_KEY_ENV;
use chatpanel_core::auth::{await_auth_sdk, readiness_event, AuthUi, ThreadSleeper};
use chatpanel_core::chat::config::ChatEndpointConfig;
use chatpanel_core::chat::{ChatPanel, HttpChatTransport, PanelKind};
use std::io::BufRead;

fn main() {
    // Drives one chat panel against a live endpoint:
    // messages come from the command line, or one per stdin line when none are given.
    // Each bot reply is printed as sanitized markup, then the whole transcript as HTML.
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: chat_console <config.json> <inline|popup> [message ...]");
        std::process::exit(2);
    }
    let kind = match PanelKind::from_str(&args[2]) {
        Some(k) => k,
        None => {
            eprintln!("invalid panel: {}", args[2]);
            std::process::exit(2);
        }
    };

    let cfg = ChatEndpointConfig::load(&args[1]).unwrap_or_else(|e| {
        eprintln!("config error: {}", e);
        std::process::exit(1);
    });

    // No auth SDK runs here, so only the key wait can fail.
    let key = await_auth_sdk(
        &mut ThreadSleeper,
        || std::env::var(PUBLISHABLE_KEY_ENV).ok(),
        || true,
    );
    if let Err(e) = &key {
        log::warn!("[auth] {}", e);
    }
    let mut auth = AuthUi::new();
    for cmd in auth.apply(readiness_event(&key, false)) {
        log::debug!("[auth] widget command {:?}", cmd);
    }

    let transport = HttpChatTransport::new(&cfg).unwrap_or_else(|e| {
        eprintln!("transport error: {}", e);
        std::process::exit(1);
    });
    let mut panel = ChatPanel::new(kind, transport, &cfg.init_message);

    if kind == PanelKind::Popup {
        if let Some(greeting) = panel.open() {
            println!("BOT {}", greeting.body.to_html());
        }
    }

    let messages: Vec<String> = if args.len() > 3 {
        args[3..].to_vec()
    } else {
        std::io::stdin().lock().lines().map_while(Result::ok).collect()
    };

    for m in &messages {
        if let Some(reply) = panel.submit(m) {
            println!("BOT {}", reply.body.to_html());
        }
    }

    println!("TRANSCRIPT {}", panel.render_html());
}
