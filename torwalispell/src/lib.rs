/*! Spell-checking and correction against a Torwali word list.

Torwali is written in a Perso-Arabic script where the same visible word can
arrive in several byte-distinct encodings. Every comparison in this crate goes
through [`normalize::normalize`] first, so a word from the bundled list and a
word typed on a different keyboard layout compare equal.

# Usage examples

```
use std::sync::Arc;
use torwalispell::lexicon::Lexicon;
use torwalispell::speller::{LexiconSpeller, Speller};

let lexicon = Lexicon::from_words(vec!["پاری", "گوتر"]);
let speller = LexiconSpeller::new(lexicon);

assert!(Arc::clone(&speller).is_correct("پاري"));

let suggestions = speller.suggest("گوتار");
assert_eq!(suggestions[0].value(), "گوتر");
```

The `torwalispell` binary in `torwalispell-bin` is a small host for the
library, reading word lists from disk and printing suggestions.
*/

#![warn(missing_docs)]
pub mod distance;
pub mod lexicon;
pub mod normalize;
pub mod speller;
pub mod wordlist;

pub(crate) mod constants;
