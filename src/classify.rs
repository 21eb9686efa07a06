use crate::dex::{to_id, Pokedex};
use crate::errors::{SearchError, SearchResult};
use schema::{Color, PokemonType, Tier};

/// One classified search token. Which variant a raw token becomes is decided
/// by a fixed priority order (see `classify`), so e.g. "psychic" is always
/// the move and "psychic type" is always the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Ability(String),
    Tier(Tier),
    Color(Color),
    Gen(u8),
    Type(PokemonType),
    Move(String),
    All,
    Mega,
    FullyEvolved,
    NotFullyEvolved,
}

/// A token together with its negation flag (a stripped leading `!`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub token: Token,
    pub negated: bool,
}

/// Classify one comma-separated piece of the query string. The matchers run
/// in fixed priority order, first match wins:
/// ability, tier, color, generation number, `all`, `mega`, fully-evolved
/// keywords, move, `<word> type`.
pub fn classify(dex: &Pokedex, raw: &str) -> SearchResult<ClassifiedToken> {
    let trimmed = raw.trim().to_ascii_lowercase();
    let (negated, body) = match trimmed.strip_prefix('!') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed.as_str()),
    };

    let token = classify_body(dex, body)
        .ok_or_else(|| SearchError::UnclassifiableToken(trimmed.clone()))?;

    // `!all` has no meaning; report it like any other unrecognized token.
    if token == Token::All && negated {
        return Err(SearchError::UnclassifiableToken(trimmed));
    }

    Ok(ClassifiedToken { token, negated })
}

fn classify_body(dex: &Pokedex, body: &str) -> Option<Token> {
    if body.is_empty() {
        return None;
    }

    let id = to_id(body);
    if dex.ability_exists(&id) {
        return Some(Token::Ability(id));
    }
    if let Some(tier) = Tier::from_search_token(body) {
        return Some(Token::Tier(tier));
    }
    if let Some(color) = Color::from_name(body) {
        return Some(Token::Color(color));
    }
    if let Ok(gen) = body.parse::<u8>() {
        if (1..=6).contains(&gen) {
            return Some(Token::Gen(gen));
        }
        return None;
    }
    match body {
        "all" => return Some(Token::All),
        "mega" | "megas" => return Some(Token::Mega),
        "fe" | "fullyevolved" => return Some(Token::FullyEvolved),
        "nfe" | "notfullyevolved" => return Some(Token::NotFullyEvolved),
        _ => {}
    }
    if dex.get_move(&id).is_some() {
        return Some(Token::Move(id));
    }
    if let Some(word) = body.strip_suffix(" type") {
        if let Some(pokemon_type) = PokemonType::from_name(word.trim()) {
            return Some(Token::Type(pokemon_type));
        }
    }
    None
}
