use chatpanel_core::reply::normalize::extract_reply_text;
use chatpanel_core::reply::{normalize_reply, render_bot_reply, RawReply};
use std::io::Read;

fn main() {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_out = match args.iter().position(|a| a == "--json") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };
    if args.len() != 1 {
        eprintln!("usage: reply_sanitizer [--json] <path/to/reply_body|->");
        std::process::exit(2);
    }

    let body = match read_body(&args[0]) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("read error: {}", e);
            std::process::exit(1);
        }
    };

    let raw = RawReply::from_body(&body);
    let sanitized = render_bot_reply(&raw);
    log::debug!("[markup] {} bytes in, {} bytes out", body.len(), sanitized.as_str().len());

    if json_out {
        let summary = serde_json::json!({
            "reply_text": extract_reply_text(&raw),
            "normalized": normalize_reply(&raw).as_str(),
            "sanitized": sanitized.as_str(),
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("json error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", sanitized);
    }
}

fn read_body(source: &str) -> std::io::Result<String> {
    if source == "-" {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        Ok(s)
    } else {
        std::fs::read_to_string(source)
    }
}
