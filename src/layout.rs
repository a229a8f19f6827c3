//! Print run expansion and sprite sheet layout
//!
//! Every output (HTML sheets, sprite sheets, the TTS save file) is derived
//! from the values computed here, so card counts, sheet assignments and
//! positions agree across all of them by construction.

use crate::core::{CardKind, Judge, Move, Rhythm};
use crate::loader::CardSet;

/// A deck as it is printed and spawned on the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrintDeck {
    Starter,
    Pool,
    Rhythm,
    Judge,
    Stumble,
}

impl PrintDeck {
    pub const ALL: [PrintDeck; 5] = [
        PrintDeck::Starter,
        PrintDeck::Pool,
        PrintDeck::Rhythm,
        PrintDeck::Judge,
        PrintDeck::Stumble,
    ];

    pub fn kind(self) -> CardKind {
        match self {
            PrintDeck::Starter | PrintDeck::Pool => CardKind::Move,
            PrintDeck::Rhythm => CardKind::Rhythm,
            PrintDeck::Judge => CardKind::Judge,
            PrintDeck::Stumble => CardKind::Stumble,
        }
    }

    /// Stem of the printable sheet file
    pub fn file_stem(self) -> &'static str {
        match self {
            PrintDeck::Starter => "starter-cards",
            PrintDeck::Pool => "pool-cards",
            PrintDeck::Rhythm => "rhythm-cards",
            PrintDeck::Judge => "judge-cards",
            PrintDeck::Stumble => "stumble-cards",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PrintDeck::Starter => "Starter",
            PrintDeck::Pool => "Pool",
            PrintDeck::Rhythm => "Rhythm",
            PrintDeck::Judge => "Judge",
            PrintDeck::Stumble => "Stumble",
        }
    }
}

/// One physical card in the print run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintedCard<'a> {
    Move(&'a Move),
    Rhythm(&'a Rhythm),
    Judge(&'a Judge),
    Stumble,
}

impl PrintedCard<'_> {
    pub fn kind(&self) -> CardKind {
        match self {
            PrintedCard::Move(_) => CardKind::Move,
            PrintedCard::Rhythm(_) => CardKind::Rhythm,
            PrintedCard::Judge(_) => CardKind::Judge,
            PrintedCard::Stumble => CardKind::Stumble,
        }
    }
}

/// The expanded, ordered list of physical cards for every deck
#[derive(Debug, Clone)]
pub struct PrintRun<'a> {
    starter_copies: u32,
    starter: Vec<PrintedCard<'a>>,
    pool: Vec<PrintedCard<'a>>,
    rhythm: Vec<PrintedCard<'a>>,
    judge: Vec<PrintedCard<'a>>,
    stumble: Vec<PrintedCard<'a>>,
}

impl<'a> PrintRun<'a> {
    /// Expand card definitions into physical copies
    ///
    /// Starter moves are repeated `starter_copies` times with all copies of a
    /// row kept adjacent; rhythm cards are repeated by their `copies` column.
    pub fn new(cards: &'a CardSet, starter_copies: u32, stumble_count: u32) -> Self {
        let starter = cards
            .starter_moves()
            .flat_map(|m| std::iter::repeat(PrintedCard::Move(m)).take(starter_copies as usize))
            .collect();
        let pool = cards.pool_moves().map(PrintedCard::Move).collect();
        let rhythm = cards
            .rhythms
            .iter()
            .flat_map(|r| std::iter::repeat(PrintedCard::Rhythm(r)).take(r.copies as usize))
            .collect();
        let judge = cards.judges.iter().map(PrintedCard::Judge).collect();
        let stumble = vec![PrintedCard::Stumble; stumble_count as usize];

        PrintRun {
            starter_copies,
            starter,
            pool,
            rhythm,
            judge,
            stumble,
        }
    }

    pub fn deck(&self, deck: PrintDeck) -> &[PrintedCard<'a>] {
        match deck {
            PrintDeck::Starter => &self.starter,
            PrintDeck::Pool => &self.pool,
            PrintDeck::Rhythm => &self.rhythm,
            PrintDeck::Judge => &self.judge,
            PrintDeck::Stumble => &self.stumble,
        }
    }

    /// Decks whose cards share one sprite sheet sequence, in packing order
    pub fn decks_of(kind: CardKind) -> &'static [PrintDeck] {
        match kind {
            CardKind::Move => &[PrintDeck::Starter, PrintDeck::Pool],
            CardKind::Rhythm => &[PrintDeck::Rhythm],
            CardKind::Judge => &[PrintDeck::Judge],
            CardKind::Stumble => &[PrintDeck::Stumble],
        }
    }

    /// All cards of a kind in packing order (starter moves before pool moves)
    pub fn cards_of(&self, kind: CardKind) -> Vec<PrintedCard<'a>> {
        Self::decks_of(kind)
            .iter()
            .flat_map(|d| self.deck(*d).iter().copied())
            .collect()
    }

    pub fn count(&self, deck: PrintDeck) -> usize {
        self.deck(deck).len()
    }

    pub fn total(&self) -> usize {
        PrintDeck::ALL.iter().map(|d| self.count(*d)).sum()
    }

    pub fn starter_copies(&self) -> u32 {
        self.starter_copies
    }

    /// Starter cards dealt to each player
    pub fn starter_hand_size(&self) -> usize {
        self.starter.len() / self.starter_copies.max(1) as usize
    }
}

/// Split `items` into pages of `per_page`, padding the last page with `None`
pub fn paginate<T: Clone>(items: &[T], per_page: usize) -> Vec<Vec<Option<T>>> {
    if per_page == 0 {
        return Vec::new();
    }
    items
        .chunks(per_page)
        .map(|chunk| {
            let mut page: Vec<Option<T>> = chunk.iter().cloned().map(Some).collect();
            page.resize(per_page, None);
            page
        })
        .collect()
}

/// A fixed grid of card cells on one sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGrid {
    pub columns: u32,
    pub rows: u32,
}

impl SheetGrid {
    pub const TTS_DEFAULT: SheetGrid = SheetGrid {
        columns: 10,
        rows: 7,
    };

    pub fn new(columns: u32, rows: u32) -> Self {
        SheetGrid { columns, rows }
    }

    pub fn capacity(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Column and row of the `index`-th cell, filled row by row
    pub fn cell_of(&self, index: usize) -> (u32, u32) {
        let columns = self.columns as usize;
        ((index % columns) as u32, (index / columns) as u32)
    }

    /// Top-left pixel of the `index`-th cell
    pub fn origin_of(&self, index: usize, card_width: u32, card_height: u32) -> (u32, u32) {
        let (col, row) = self.cell_of(index);
        (col * card_width, row * card_height)
    }

    pub fn sheets_needed(&self, cards: usize) -> usize {
        cards.div_ceil(self.capacity())
    }

    /// Sheet and cell of the `position`-th card of a kind
    pub fn slot_of(&self, position: usize) -> SpriteSlot {
        SpriteSlot {
            sheet: position / self.capacity(),
            index: position % self.capacity(),
        }
    }
}

/// Position of one printed card on the sprite sheets of its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSlot {
    pub sheet: usize,
    pub index: usize,
}

/// File name of a face sheet; numbered only when a kind needs several sheets
pub fn face_file_name(kind: CardKind, sheet: usize, total_sheets: usize) -> String {
    if total_sheets > 1 {
        format!("{}-cards_{}.png", kind.slug(), sheet + 1)
    } else {
        format!("{}-cards.png", kind.slug())
    }
}

/// File name of the single shared back image of a kind
pub fn back_file_name(kind: CardKind) -> String {
    format!("{}-back.png", kind.slug())
}

/// One sprite sheet of card faces
#[derive(Debug, Clone)]
pub struct FaceSheet<'a> {
    pub kind: CardKind,
    /// Zero-based sheet number within its kind
    pub number: usize,
    pub file_name: String,
    pub cards: Vec<PrintedCard<'a>>,
}

/// A contiguous run of one deck's cards on one face sheet
///
/// Each slice becomes one deck object in the TTS save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSlice {
    pub deck: PrintDeck,
    pub nickname: String,
    pub description: String,
    pub face_file: String,
    pub back_file: String,
    /// Zero-based face sheet number within the kind
    pub sheet: usize,
    /// Index of the first card within the face sheet
    pub start: usize,
    pub len: usize,
}

/// Where every printed card lands on the sprite sheets
#[derive(Debug, Clone)]
pub struct SpriteLayout<'a> {
    pub grid: SheetGrid,
    pub faces: Vec<FaceSheet<'a>>,
    pub slices: Vec<DeckSlice>,
}

impl<'a> SpriteLayout<'a> {
    pub fn new(run: &PrintRun<'a>, grid: SheetGrid) -> Self {
        let capacity = grid.capacity();
        let mut faces = Vec::new();
        let mut slices = Vec::new();

        for kind in CardKind::ALL {
            let cards = run.cards_of(kind);
            let total_sheets = grid.sheets_needed(cards.len());

            for (number, chunk) in cards.chunks(capacity).enumerate() {
                faces.push(FaceSheet {
                    kind,
                    number,
                    file_name: face_file_name(kind, number, total_sheets),
                    cards: chunk.to_vec(),
                });
            }

            let mut offset = 0;
            for &deck in PrintRun::decks_of(kind) {
                let len = run.count(deck);
                let parts = sheets_touched(offset, len, capacity);
                let mut pos = offset;
                let mut remaining = len;
                let mut part = 0;
                while remaining > 0 {
                    let SpriteSlot { sheet, index: start } = grid.slot_of(pos);
                    let n = remaining.min(capacity - start);
                    let (nickname, description) = slice_labels(run, deck, sheet, part, parts);
                    slices.push(DeckSlice {
                        deck,
                        nickname,
                        description,
                        face_file: face_file_name(kind, sheet, total_sheets),
                        back_file: back_file_name(kind),
                        sheet,
                        start,
                        len: n,
                    });
                    pos += n;
                    remaining -= n;
                    part += 1;
                }
                offset += len;
            }
        }

        SpriteLayout {
            grid,
            faces,
            slices,
        }
    }

    pub fn faces_of(&self, kind: CardKind) -> impl Iterator<Item = &FaceSheet<'a>> {
        self.faces.iter().filter(move |f| f.kind == kind)
    }

    /// Slot of every card of a deck, in print order
    pub fn slots(&self, deck: PrintDeck) -> Vec<SpriteSlot> {
        self.slices
            .iter()
            .filter(|s| s.deck == deck)
            .flat_map(|s| {
                (s.start..s.start + s.len).map(move |index| SpriteSlot {
                    sheet: s.sheet,
                    index,
                })
            })
            .collect()
    }

    /// Kinds that have at least one face sheet
    pub fn kinds_present(&self) -> Vec<CardKind> {
        CardKind::ALL
            .into_iter()
            .filter(|k| self.faces_of(*k).next().is_some())
            .collect()
    }
}

fn sheets_touched(offset: usize, len: usize, capacity: usize) -> usize {
    if len == 0 {
        0
    } else {
        (offset + len - 1) / capacity - offset / capacity + 1
    }
}

fn slice_labels(
    run: &PrintRun<'_>,
    deck: PrintDeck,
    sheet: usize,
    part: usize,
    parts: usize,
) -> (String, String) {
    let numbered = |base: &str| {
        if parts > 1 {
            format!("{base} {}", part + 1)
        } else {
            base.to_string()
        }
    };
    match deck {
        PrintDeck::Starter => (
            numbered(&format!(
                "Starter Move Cards ({} Players)",
                run.starter_copies()
            )),
            format!(
                "Starting deck - Deal {} cards to each of {} players",
                run.starter_hand_size(),
                run.starter_copies()
            ),
        ),
        PrintDeck::Pool => (
            format!("Pool Move Cards {}", sheet + 1),
            "Advanced move cards for drafting".to_string(),
        ),
        PrintDeck::Rhythm => (
            numbered("Rhythm Cards"),
            format!("Rhythm cards - Sheet {}", sheet + 1),
        ),
        PrintDeck::Judge => (
            numbered("Judge Cards"),
            "Judge cards with special requirements".to_string(),
        ),
        PrintDeck::Stumble => (
            numbered("Stumble Cards"),
            "Stumble penalty cards".to_string(),
        ),
    }
}
