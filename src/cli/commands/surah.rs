//! Surah lookup command handler

use super::surah_arg;
use crate::args::SurahSubcommand;
use hlaqh_progress::core::progress::pages_for_partial_surah;
use hlaqh_progress::core::quran::{curriculum, memorization_position, surah_id_at_position, Surah};
use hlaqh_progress::error;

/// Dispatch surah subcommands
pub fn run(subcommand: SurahSubcommand) {
    match subcommand {
        SurahSubcommand::List => list(),
        SurahSubcommand::Show { surah } => match surah_arg(&surah) {
            Ok(surah) => show(surah),
            Err(err) => {
                error!("Surah lookup failed for '{surah}'");
                eprintln!("{err}");
            }
        },
        SurahSubcommand::Position { id } => println!("{}", memorization_position(id)),
        SurahSubcommand::At { position } => println!("{}", surah_id_at_position(position)),
        SurahSubcommand::Pages { id, ayah } => println!("{}", pages_for_partial_surah(id, ayah)),
    }
}

fn list() {
    println!("{:>4}  {:>3}  {:<18} {:>6} {:>6}", "Pos", "Id", "Name", "Ayahs", "Pages");
    for surah in curriculum() {
        println!(
            "{:>4}  {:>3}  {:<18} {:>6} {:>6}",
            surah.memorization_order, surah.id, surah.english_name, surah.ayah_count, surah.total_pages
        );
    }
}

fn show(surah: &Surah) {
    println!("\n=== {} ({}) ===", surah.english_name, surah.name);
    println!("Id: {}", surah.id);
    println!("Curriculum position: {}", surah.memorization_order);
    println!("Ayahs: {}", surah.ayah_count);
    println!(
        "Pages: {}-{} ({} counted)",
        surah.start_page, surah.end_page, surah.total_pages
    );
}
