//! Verbatim verification of Quranic quotations.
//!
//! Given a piece of Arabic text, decide whether it is an exact quotation from
//! the reference corpus, a quotation that differs only in spelling and
//! vowelling, or neither; and for a cited quotation, where it first departs
//! from the cited verse.
//!
//! # Architecture
//!
//! ```text
//!  data dir ──▶ corpus::Corpus ──▶ index::CorpusIndex ──▶ Validator
//!  (JSON)       (load, check)      (arena, text maps,     validate
//!                                   suffix array)         validate_against
//!                    ▲                    ▲               analyze_fabrication
//!                    │                    │               search, get_verse ...
//!               ┌────┴────────────────────┴──┐
//!               │        normalize           │
//!               │ (ordered rule pipeline,    │
//!               │  NormalizeOptions)         │
//!               └────────────────────────────┘
//! ```
//!
//! | Module        | Role                                                 |
//! |---------------|------------------------------------------------------|
//! | `normalize`   | canonical comparable form of Arabic text             |
//! | `types`       | verses, surahs, riwayat, result types                |
//! | `reference`   | `surah:ayah[-end]` citations                         |
//! | `corpus`      | data directory loading and structural checks         |
//! | `index`       | exact/normalized maps and the flattened corpus       |
//! | `validator`   | verdicts and accessors                               |
//! | `fabrication` | word-level invented-content detection                |
//! | `search`      | containment search over the primary text             |
//!
//! # Usage
//!
//! ```ignore
//! use tahqiq::{MatchType, Validator, ValidatorConfig};
//!
//! let validator = Validator::from_data_dir("data/quran".as_ref(), ValidatorConfig::default())?;
//! let result = validator.validate("بسم الله الرحمن الرحيم");
//! assert_eq!(result.match_type, MatchType::Normalized);
//! assert_eq!(result.reference.as_deref(), Some("1:1"));
//! ```

pub mod config;
pub mod corpus;
pub mod fabrication;
pub mod index;
pub mod normalize;
pub mod reference;
pub mod search;
pub mod testing;
pub mod types;
pub mod validator;

pub use config::ValidatorConfig;
pub use corpus::{Corpus, CorpusError, RiwayaData};
pub use index::CorpusIndex;
pub use normalize::{canonicalize, contains_arabic, is_arabic_char, normalize, NormalizeOptions};
pub use reference::VerseRef;
pub use types::{
    FabricationAnalysis, FabricationStats, MatchType, RevelationType, Riwaya, RiwayaMeta,
    SearchHit, Suggestion, Surah, ValidationResult, VariantMatch, VariantRow, Verse,
    VerseAddress, VerseRange, WordVerdict,
};
pub use validator::Validator;
