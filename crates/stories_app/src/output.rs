use std::io::{self, Write};

use stories_engine::TopStories;

/// Writes the numbered story list followed by the elapsed time.
pub fn write_listing<W: Write>(out: &mut W, top: &TopStories) -> io::Result<()> {
    for (rank, story) in top.stories.iter().enumerate() {
        write!(out, "{:>3}. {}", rank + 1, story.title)?;
        if let Some(host) = story.host() {
            write!(out, " ({host})")?;
        }
        writeln!(out)?;
        writeln!(out, "     {}", story.url)?;
    }
    writeln!(out, "This page was rendered in {:?}", top.elapsed)
}
