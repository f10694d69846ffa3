//! CSS stylesheet parsing.
//!
//! Dashboard themes are naturally written as CSS: the rule layers map onto
//! three familiar constructs.
//!
//! - **Selectors**: class selectors name roles (`.card-surface`,
//!   `.trading-card`, `.newsCard`). Comma lists define several roles at
//!   once.
//! - **Dark mode**: rules inside `@media (prefers-color-scheme: dark)` feed
//!   the mode layer. `prefers-color-scheme: light` blocks are treated as
//!   unqualified rules, since light styling doubles as the default.
//! - **Hover**: the `:hover` pseudo-class feeds the state layer.
//!
//! The parser is built on `cssparser` (the tokenizer used by Firefox), so
//! comments, escapes and nested functions like `rgba(0,0,0,0.2)` are handled
//! robustly. Invalid declarations are skipped with a warning, the way a
//! browser would. Unknown roles and unsupported selectors are errors: only
//! `.class` and `.class:hover`, optionally comma-separated, are accepted,
//! and an `@media` prelude must be a single `prefers-color-scheme`
//! condition.
//!
//! | CSS Property | Value |
//! |--------------|-------|
//! | `color`, `fg` | Color (hex, `rgb()`, `rgba()`, named) |
//! | `background`, `background-color`, `bg` | Color |
//! | `transition-duration`, `transition` | `0.3s`, `300ms` |
//! | `border`, `border-radius`, `padding`, `margin`, `box-shadow`, `transform`, `font-weight`, `width` | kept verbatim |
//!
//! # Example
//!
//! ```css
//! .profit { color: #4CAF50; }
//!
//! .news-card {
//!     border-radius: 8px;
//!     transition-duration: 0.3s;
//! }
//!
//! .news-card:hover {
//!     transform: translateY(-2px);
//!     box-shadow: 0 4px 8px rgba(0,0,0,0.2);
//! }
//!
//! @media (prefers-color-scheme: dark) {
//!     .trading-card { background: #2D2D2D; }
//! }
//! ```

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, SourcePosition, Token,
};
use tracing::warn;

use super::error::StylesheetError;
use super::property::{Property, PropertySet, PropertyValue};
use super::rules::{Layer, RuleLayers};
use crate::role::SemanticRole;

/// Parses a CSS stylesheet into rule layers.
///
/// # Example
///
/// ```rust
/// use dashtheme::style::{parse_css, Layer};
/// use dashtheme::SemanticRole;
///
/// let layers = parse_css(".button:hover { transform: translateY(-2px); }").unwrap();
/// assert!(layers.get(Layer::State, SemanticRole::Button).is_some());
/// ```
pub fn parse_css(css: &str) -> Result<RuleLayers, StylesheetError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut collector = RuleCollector {
        layers: RuleLayers::new(),
        current_mode: None,
        error: None,
    };

    let mut failure = None;
    for result in cssparser::StyleSheetParser::new(&mut parser, &mut collector) {
        if let Err((err, slice)) = result {
            failure = Some(describe(&err, slice));
            break;
        }
    }

    if let Some(err) = collector.error.take() {
        return Err(err);
    }
    if let Some(message) = failure {
        return Err(StylesheetError::Parse {
            path: None,
            message,
        });
    }

    Ok(collector.layers)
}

fn describe(err: &ParseError<'_, ()>, slice: &str) -> String {
    format!(
        "CSS parse error at line {}: {:?} near '{}'",
        err.location.line + 1,
        err.kind,
        slice.trim()
    )
}

struct RuleCollector {
    layers: RuleLayers,
    current_mode: Option<Mode>,
    /// First semantic error; takes precedence over syntax failures.
    error: Option<StylesheetError>,
}

impl RuleCollector {
    fn record(&mut self, error: StylesheetError) {
        self.error.get_or_insert(error);
    }

    fn reject_media<'i>(
        &mut self,
        input: &mut Parser<'i, '_>,
        start: SourcePosition,
        message: &str,
    ) -> ParseError<'i, ()> {
        while input.next_including_whitespace_and_comments().is_ok() {}
        self.record(StylesheetError::InvalidDefinition {
            rule: format!("@media {}", input.slice_from(start).trim()),
            message: message.to_string(),
            path: None,
        });
        input.new_custom_error::<(), ()>(())
    }

    /// Records an unsupported prelude, naming it in full.
    fn reject<'i>(
        &mut self,
        input: &mut Parser<'i, '_>,
        start: SourcePosition,
        message: &str,
    ) -> ParseError<'i, ()> {
        while input.next_including_whitespace_and_comments().is_ok() {}
        self.record(StylesheetError::InvalidDefinition {
            rule: input.slice_from(start).trim().to_string(),
            message: message.to_string(),
            path: None,
        });
        input.new_custom_error::<(), ()>(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Light,
    Dark,
}

#[derive(Clone, Copy)]
struct Selector {
    role: SemanticRole,
    hover: bool,
}

impl<'i> QualifiedRuleParser<'i> for RuleCollector {
    type Prelude = Vec<Selector>;
    type QualifiedRule = ();
    type Error = ();

    /// Accepts a comma-separated list of `.class` or `.class:hover`.
    ///
    /// Combinators, type selectors and compound classes are rejected.
    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        let mut selectors: Vec<Selector> = Vec::new();
        // Set at the start of the list and after each comma.
        let mut expecting = true;
        let mut after_space = false;

        loop {
            let token = match input.next_including_whitespace() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            match token {
                Token::WhiteSpace(_) => {
                    after_space = true;
                    continue;
                }
                Token::Comma if !expecting => expecting = true,
                Token::Delim('.') if expecting => {
                    let name = match input.next_including_whitespace() {
                        Ok(Token::Ident(name)) => Some(name.as_ref().to_string()),
                        _ => None,
                    };
                    let Some(name) = name else {
                        return Err(self.reject(input, start, "expected a class name after '.'"));
                    };
                    match name.parse::<SemanticRole>() {
                        Ok(role) => selectors.push(Selector { role, hover: false }),
                        Err(_) => {
                            self.record(StylesheetError::UnknownRole { name, path: None });
                            return Err(input.new_custom_error::<(), ()>(()));
                        }
                    }
                    expecting = false;
                }
                Token::Colon if !expecting && !after_space => {
                    let hover = matches!(
                        input.next_including_whitespace(),
                        Ok(Token::Ident(pseudo)) if pseudo.as_ref() == "hover"
                    );
                    match selectors.last_mut() {
                        Some(selector) if hover && !selector.hover => selector.hover = true,
                        _ => {
                            return Err(self.reject(
                                input,
                                start,
                                "only :hover on a class selector is supported",
                            ))
                        }
                    }
                }
                _ => {
                    return Err(self.reject(
                        input,
                        start,
                        "only class selectors, optionally with :hover, separated by commas are supported",
                    ))
                }
            }
            after_space = false;
        }

        if expecting {
            return Err(self.reject(input, start, "empty selector"));
        }
        Ok(selectors)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = PropertyDeclarationParser;
        let mut properties = PropertySet::new();

        for item in RuleBodyParser::new(input, &mut decl_parser) {
            match item {
                Ok((property, value)) => properties.set(property, value),
                Err((_, declaration)) => {
                    warn!(
                        declaration = declaration.trim(),
                        "skipping invalid CSS declaration"
                    );
                }
            }
        }

        if properties.is_empty() {
            return Ok(());
        }

        let dark = self.current_mode == Some(Mode::Dark);
        for selector in prelude {
            let layer = match (selector.hover, dark) {
                (true, true) => {
                    self.record(StylesheetError::InvalidDefinition {
                        rule: format!(".{}:hover", selector.role.class_name()),
                        message: "hover rules cannot be mode-specific".to_string(),
                        path: None,
                    });
                    continue;
                }
                (true, false) => Layer::State,
                (false, true) => Layer::Mode,
                (false, false) => Layer::default_for(selector.role),
            };
            self.layers.insert(layer, selector.role, properties.clone());
        }
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for RuleCollector {
    type Prelude = Mode;
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        if name.as_ref() != "media" {
            return Err(input.new_custom_error::<(), ()>(()));
        }

        // Exactly one (prefers-color-scheme: ...) condition. Media types and
        // further `and` conditions would be silently dropped otherwise.
        const MESSAGE: &str = "only a single (prefers-color-scheme: dark|light) condition is supported";
        let start = input.position();
        let mut found_mode: Option<Mode> = None;
        loop {
            match input.next() {
                Ok(Token::ParenthesisBlock) if found_mode.is_none() => {
                    let nested = input.parse_nested_block(|input| {
                        input.expect_ident_matching("prefers-color-scheme")?;
                        input.expect_colon()?;
                        let val = input.expect_ident()?;
                        match val.as_ref() {
                            "dark" => Ok(Mode::Dark),
                            "light" => Ok(Mode::Light),
                            _ => Err(input.new_custom_error::<(), ()>(())),
                        }
                    });
                    match nested {
                        Ok(mode) => found_mode = Some(mode),
                        Err(_) => return Err(self.reject_media(input, start, MESSAGE)),
                    }
                }
                Err(_) => break,
                Ok(_) => return Err(self.reject_media(input, start, MESSAGE)),
            }
        }

        match found_mode {
            Some(mode) => Ok(mode),
            None => Err(self.reject_media(input, start, MESSAGE)),
        }
    }

    fn parse_block<'t>(
        &mut self,
        mode: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let old_mode = self.current_mode;
        self.current_mode = Some(mode);

        let mut nested_failure = None;
        for result in cssparser::StyleSheetParser::new(input, self) {
            if let Err((err, slice)) = result {
                nested_failure.get_or_insert_with(|| describe(&err, slice));
            }
        }

        self.current_mode = old_mode;
        if let Some(message) = nested_failure {
            self.record(StylesheetError::Parse {
                path: None,
                message,
            });
        }
        Ok(())
    }
}

struct PropertyDeclarationParser;

impl<'i> DeclarationParser<'i> for PropertyDeclarationParser {
    type Declaration = (Property, PropertyValue);
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let property = Property::from_css_name(name.as_ref())
            .ok_or_else(|| input.new_custom_error::<(), ()>(()))?;

        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let raw = input.slice_from(start);

        PropertyValue::parse(property, raw)
            .map(|value| (property, value))
            .map_err(|_| input.new_custom_error::<(), ()>(()))
    }
}

impl<'i> AtRuleParser<'i> for PropertyDeclarationParser {
    type Prelude = ();
    type AtRule = (Property, PropertyValue);
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for PropertyDeclarationParser {
    type Prelude = ();
    type QualifiedRule = (Property, PropertyValue);
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, (Property, PropertyValue), ()> for PropertyDeclarationParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
