use std::env;
use std::thread;
use std::time::Duration;

use tracklet::config::Settings;
use tracklet::{AudioBackend, FrontendContext, TagField, TrackHandle};

fn format_ms(ms: i64) -> String {
    let secs = ms.max(0) / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let Some(file) = args.next() else {
        eprintln!("usage: tracklet <file> [tag...]");
        std::process::exit(2);
    };
    let tags: Vec<String> = {
        let requested: Vec<String> = args.collect();
        if requested.is_empty() {
            TagField::ALL.iter().map(|f| f.key().to_string()).collect()
        } else {
            requested
        }
    };

    let settings = Settings::load_or_default();
    let backend = AudioBackend::open_default()?;
    let context = FrontendContext::from_settings(&settings).into_handle();

    let mut track = TrackHandle::new(backend.stream(), settings.track.looping, Some(context));
    track.try_set_file_name(&file)?;

    for tag in &tags {
        println!("{tag}: {}", track.metadata(tag).trim_end_matches(['\0', ' ']));
    }

    track.set_playing(true);
    let total = format_ms(track.duration_ms());
    while track.is_playing() {
        log::info!("{} / {}", format_ms(track.time_ms()), total);
        thread::sleep(Duration::from_secs(1));
    }

    Ok(())
}
