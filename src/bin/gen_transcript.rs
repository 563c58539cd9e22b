//! Synthetic transcript generator for stress testing wagroup.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output] [group]
//! Example: cargo run --features gen-test --bin gen_transcript -- 100000 heavy_chat.txt "Test Group"

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🤯", "💀", "🔥", "👍", "❤️", "💔",
    "🏳️‍🌈", "🇰🇿", "👨‍👩‍👧‍👦", "🧑‍🚀", "🤷‍♀️",
];

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "User;With;Semicolons",
    "User \"Quoted\"",
    "🔥FireUser🔥",
    "+49 170 1234567",
];

const MEDIA: &[&str] = &[
    "audio omitted",
    "video note omitted",
    "video omitted",
    "image omitted",
    "GIF omitted",
    "sticker omitted",
];

const CALLS: &[&str] = &[
    "Call. 12 min",
    "Missed voice call. Tap to call back",
    "Video call. 3 min",
    "Missed video call. Tap to call back",
];

const DELETIONS: &[&str] = &[
    "This message was deleted.",
    "You deleted this message.",
    "You deleted this message as admin",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");
    let group = args.get(3).map(|s| s.as_str()).unwrap_or("Test Group");

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Group:    {}", group);
    println!();

    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    // Export preamble that precedes the first header
    let preamble = "WhatsApp Chat Export\n\n";
    writer.write_all(preamble.as_bytes()).unwrap();
    bytes_written += preamble.len();

    let banner = format!(
        "[01.01.24, 00:00:00] {}: \u{200e}Messages and calls are end-to-end encrypted.\n",
        group
    );
    writer.write_all(banner.as_bytes()).unwrap();
    bytes_written += banner.len();

    for i in 0..count {
        let author = AUTHORS.choose(&mut rng).unwrap();
        let content = generate_content(&mut rng, i, author);

        let line = format!("{} {}: {}\n", timestamp(i), author, content);
        bytes_written += line.len();
        writer.write_all(line.as_bytes()).unwrap();

        // Occasionally insert blank or stray lines to test robustness
        if i % 1000 == 500 {
            let noise = generate_noise_line(&mut rng);
            writer.write_all(noise.as_bytes()).unwrap();
            bytes_written += noise.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush().unwrap();

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
}

/// `[DD.MM.YY, HH:MM:SS]` advancing one minute per message.
fn timestamp(index: usize) -> String {
    let minutes = index;
    let day = (minutes / (24 * 60)) % 28 + 1;
    let month = (minutes / (28 * 24 * 60)) % 12 + 1;
    let year = 24 + minutes / (12 * 28 * 24 * 60) % 76;
    format!(
        "[{:02}.{:02}.{:02}, {:02}:{:02}:{:02}]",
        day,
        month,
        year,
        (minutes / 60) % 24,
        minutes % 60,
        index % 60
    )
}

fn generate_content(rng: &mut impl Rng, index: usize, author: &str) -> String {
    match index % 20 {
        // Plain text
        0..=6 => format!("Normal message #{} with some text", index),

        // Wrapped across physical lines
        7 => format!("First line #{}\nsecond line\n\nthird line after a blank", index),
        8 => format!("Message with: colons: inside #{}", index),

        // Emoji spam
        9 => {
            let emojis: String = (0..30).map(|_| *EMOJIS.choose(rng).unwrap()).collect();
            format!("Emoji spam: {} #{}", emojis, index)
        }

        10 => format!("Fixed a typo #{} <This message was edited>", index),
        11 => DELETIONS.choose(rng).unwrap().to_string(),
        12 | 13 => format!("\u{200e}{}", MEDIA.choose(rng).unwrap()),
        14 => CALLS.choose(rng).unwrap().to_string(),
        15 => format!("{} started a video call", author),
        16 => generate_poll(rng, index),

        // Membership churn, dropped by the parser
        17 => format!("{} added Someone #{}", author, index),

        18 => format!("Кириллица: Привет мир! #{}", index),
        19 => format!("Mixed: Hello Привет 你好 🌍 #{}", index),

        _ => format!("Fallback message #{}", index),
    }
}

fn generate_poll(rng: &mut impl Rng, index: usize) -> String {
    let mut poll = format!("POLL:\nQuestion number {}?", index);
    for option in 0..rng.gen_range(1..=5) {
        let votes: u32 = rng.gen_range(0..20);
        let unit = if votes == 1 { "vote" } else { "votes" };
        poll.push_str(&format!("\nOPTION:Choice {}({} {})", option + 1, votes, unit));
    }
    poll
}

fn generate_noise_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => "\n".to_string(),
        1 => "   \n".to_string(),
        2 => "\u{200e}\n".to_string(),
        _ => "[not a timestamp] stray continuation line\n".to_string(),
    }
}
