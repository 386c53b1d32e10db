use crate::domain::model::{Grid, TableShape, WordList, Wrapper, WrapperTally};
use crate::domain::ports::Chooser;

/// `words_per_phrase` words drawn with replacement, joined by single spaces.
pub fn random_phrase<R: Chooser + ?Sized>(
    words: &WordList,
    words_per_phrase: usize,
    chooser: &mut R,
) -> String {
    debug_assert!(!words.is_empty());
    chooser
        .pick_many(words.len(), words_per_phrase)
        .into_iter()
        .map(|i| words.get(i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Picks a wrapper, then a fresh phrase for it.
pub fn random_cell<R: Chooser + ?Sized>(
    words: &WordList,
    words_per_phrase: usize,
    chooser: &mut R,
) -> (Wrapper, String) {
    let wrapper = Wrapper::ALL[chooser.pick(Wrapper::ALL.len())];
    let phrase = random_phrase(words, words_per_phrase, chooser);
    (wrapper, wrapper.wrap(&phrase))
}

pub fn synthesize_grid<R: Chooser + ?Sized>(
    words: &WordList,
    shape: TableShape,
    words_per_phrase: usize,
    chooser: &mut R,
) -> (Grid, WrapperTally) {
    let mut tally = WrapperTally::default();
    let mut cells = Vec::with_capacity(shape.rows);

    for _ in 0..shape.rows {
        let mut row = Vec::with_capacity(shape.cols);
        for _ in 0..shape.cols {
            let (wrapper, cell) = random_cell(words, words_per_phrase, chooser);
            tally.record(wrapper);
            row.push(cell);
        }
        cells.push(row);
    }

    (Grid { shape, cells }, tally)
}
