use crate::{
    process::Process,
    profile::{Profile, ProfileBuilder},
    stage::{
        bind_particles::BindParticles, bind_prepositions::BindPrepositions,
        convert_quotes::ConvertQuotes, encode_entities::EncodeEntities,
        fix_apostrophes::FixApostrophes, format_degrees::FormatDegrees, group_digits::GroupDigits,
        normalize_line_breaks::NormalizeLineBreaks, promote_dashes::PromoteDashes,
        replace_numero::ReplaceNumero, replace_symbols::ReplaceSymbols,
        space_currency::SpaceCurrency, space_signs::SpaceSigns, space_years::SpaceYears,
        tighten_plus_minus::TightenPlusMinus,
    },
};

/// The full typography chain producing Unicode glyphs.
///
/// Order is load-bearing: quotes are curly before dashes are promoted, the ru
/// bindings run before digit grouping, and `±` is tightened last.
pub fn unicode() -> Profile<impl Process> {
    Profile::builder("unicode")
        .add_stage(NormalizeLineBreaks)
        .add_stage(ConvertQuotes)
        .add_stage(ReplaceSymbols)
        .add_stage(PromoteDashes)
        .add_stage(FixApostrophes)
        // ru only
        .add_stage(BindPrepositions)
        .add_stage(BindParticles)
        .add_stage(SpaceYears)
        .add_stage(SpaceSigns)
        .add_stage(ReplaceNumero)
        // both locales
        .add_stage(GroupDigits)
        .add_stage(SpaceCurrency)
        .add_stage(FormatDegrees)
        .add_stage(TightenPlusMinus)
        .build()
}

/// [`unicode`] followed by HTML entity encoding.
pub fn html() -> Profile<impl Process> {
    ProfileBuilder::extend("html", unicode())
        .add_stage(EncodeEntities)
        .build()
}

/// Entity encoding alone, for text that is already typographed.
pub fn entities() -> Profile<impl Process> {
    Profile::builder("entities").add_stage(EncodeEntities).build()
}
