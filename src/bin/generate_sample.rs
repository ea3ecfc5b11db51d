//! Writes a small `concept_albums.csv` so the explorer has something to open.

use anyhow::{Context, Result};
use concept_album_explorer::data::model::AlbumRecord;

const OUTPUT: &str = "concept_albums.csv";

/// (artist, album, genre, era)
const ALBUMS: &[(&str, &str, &str, &str)] = &[
    ("The Beatles", "Sgt. Pepper's Lonely Hearts Club Band", "Rock", "1960s"),
    ("The Beach Boys", "Pet Sounds", "Rock", "1960s"),
    ("The Who", "Tommy", "Rock", "1960s"),
    ("The Kinks", "Arthur (Or the Decline and Fall of the British Empire)", "Rock", "1960s"),
    ("Pink Floyd", "The Dark Side of the Moon", "Progressive Rock", "1970s"),
    ("Pink Floyd", "The Wall", "Rock", "1970s"),
    ("Marvin Gaye", "What's Going On", "Soul", "1970s"),
    ("David Bowie", "The Rise and Fall of Ziggy Stardust and the Spiders from Mars", "Rock", "1970s"),
    ("Genesis", "The Lamb Lies Down on Broadway", "Progressive Rock", "1970s"),
    ("Rush", "2112", "Progressive Rock", "1970s"),
    ("Stevie Wonder", "Songs in the Key of Life", "Soul", "1970s"),
    ("Prince", "Sign o' the Times", "Funk", "1980s"),
    ("Queensrÿche", "Operation: Mindcrime", "Metal", "1980s"),
    ("Kate Bush", "Hounds of Love", "Art Pop", "1980s"),
    ("Nine Inch Nails", "The Downward Spiral", "Industrial", "1990s"),
    ("Lauryn Hill", "The Miseducation of Lauryn Hill", "Hip-Hop", "1990s"),
    ("Radiohead", "OK Computer", "Alternative", "1990s"),
    ("Green Day", "American Idiot", "Punk", "2000s"),
    ("My Chemical Romance", "The Black Parade", "Alternative", "2000s"),
    ("Janelle Monáe", "The ArchAndroid", "R&B", "2010s"),
    ("Kendrick Lamar", "good kid, m.A.A.d city", "Hip-Hop", "2010s"),
    ("Beyoncé", "Lemonade", "R&B", "2010s"),
    ("Frank Ocean", "Blonde", "R&B", "2010s"),
    ("Taylor Swift", "folklore", "Pop", "2020s"),
];

fn listen_link(artist: &str, album: &str) -> String {
    let query = format!("{artist} {album}");
    format!(
        "https://music.youtube.com/search?q={}",
        urlencoding::encode(&query)
    )
}

fn main() -> Result<()> {
    let mut writer = csv::Writer::from_path(OUTPUT).with_context(|| format!("creating {OUTPUT}"))?;
    for &(artist, album, genre, era) in ALBUMS {
        let link = listen_link(artist, album);
        let record = AlbumRecord::new(artist, album, genre, era, &link);
        writer
            .serialize(&record)
            .with_context(|| format!("writing {album}"))?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} albums to {OUTPUT}", ALBUMS.len());
    Ok(())
}
