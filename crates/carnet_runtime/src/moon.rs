//! Postcard boards and letter previews for the moon page.

use platform_host::{LetterItem, PostcardImage};

use crate::clock::ClockSnapshot;

pub const MAX_BOARDS: usize = 6;
pub const MAX_THUMBS_PER_BOARD: usize = 6;
pub const LETTER_PREVIEW_CHARS: usize = 260;
/// Most recent postcard images read when building boards.
pub const POSTCARD_FEED_LIMIT: usize = 60;
pub const LETTER_FEED_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardThumb {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostcardBoard {
    pub name: String,
    pub thumbs: Vec<BoardThumb>,
}

/// Groups images by board in first-seen order. Images without a board or URL are skipped.
pub fn group_postcard_boards(images: &[PostcardImage]) -> Vec<PostcardBoard> {
    let mut boards: Vec<PostcardBoard> = Vec::new();
    for image in images {
        let (Some(board), Some(url)) = (image.board.as_deref(), image.url.as_deref()) else {
            continue;
        };
        if board.is_empty() || url.is_empty() {
            continue;
        }
        let index = match boards.iter().position(|entry| entry.name == board) {
            Some(index) => index,
            None => {
                boards.push(PostcardBoard {
                    name: board.to_string(),
                    thumbs: Vec::new(),
                });
                boards.len() - 1
            }
        };
        let thumbs = &mut boards[index].thumbs;
        if thumbs.len() < MAX_THUMBS_PER_BOARD {
            thumbs.push(BoardThumb {
                id: image.id.clone(),
                url: url.to_string(),
            });
        }
    }
    boards.truncate(MAX_BOARDS);
    boards
}

/// First 260 characters of a letter, with an ellipsis when cut.
pub fn letter_preview(text: &str) -> String {
    if text.chars().count() <= LETTER_PREVIEW_CHARS {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(LETTER_PREVIEW_CHARS).collect();
    preview.push('…');
    preview
}

pub fn letter_folder_label(letter: &LetterItem) -> &str {
    letter
        .folder
        .as_deref()
        .filter(|folder| !folder.is_empty())
        .unwrap_or("loose fragment")
}

/// `Mon DD, YYYY` of the letter's creation, or empty when unknown.
pub fn letter_date_label(letter: &LetterItem) -> String {
    letter
        .created_at_ms
        .and_then(|ms| i64::try_from(ms).ok())
        .map(|ms| ClockSnapshot::from_unix_ms_utc(ms).date_label())
        .unwrap_or_default()
}

pub fn frame_count_label(count: usize) -> String {
    if count == 1 {
        "1 frame".to_string()
    } else {
        format!("{count} frames")
    }
}
