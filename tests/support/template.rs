//! Fixed-template hook rendering, used as an oracle for the synthesizer.
//!
//! The template is the Pools hook written out by hand. Rewriting swaps whole
//! tokens only, so `pools` inside `usePools` is never touched.

use query_hookgen::NamingRecord;
use similar::TextDiff;

/// Pools hook as written by hand. The hook constant is not exported.
pub const POOLS_TEMPLATE: &str = r#"
export interface UsePoolsQuery<TData> extends ReactQueryParams<QueryPoolsResponse, TData> {
    request?: QueryPoolsRequest;
}
const usePools = <TData = QueryPoolsResponse,>({
    request,
    options
}: UsePoolsQuery<TData>) => {
    return useQuery<QueryPoolsResponse, Error, TData>(["poolsQuery", request], () => {
        if (!queryService) throw new Error("Query Service not initialized");
        return queryService.pools(request);
    }, options);
};
    "#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Ident(String),
    /// Contents of a double-quoted string, without the quotes
    Str(String),
    Punct(char),
    Space(String),
}

impl Token {
    fn text(&self) -> String {
        match self {
            Token::Ident(s) | Token::Space(s) => s.clone(),
            Token::Str(s) => format!("\"{s}\""),
            Token::Punct(c) => c.to_string(),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Split TypeScript source into identifiers, strings, punctuation and whitespace.
pub fn tokenize(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            let mut run = String::from(c);
            while let Some(&next) = chars.peek().filter(|n| n.is_whitespace()) {
                run.push(next);
                chars.next();
            }
            tokens.push(Token::Space(run));
        } else if is_ident_start(c) {
            let mut ident = String::from(c);
            while let Some(&next) = chars.peek().filter(|n| is_ident_continue(**n)) {
                ident.push(next);
                chars.next();
            }
            tokens.push(Token::Ident(ident));
        } else if c == '"' {
            let mut contents = String::new();
            while let Some(next) = chars.next() {
                match next {
                    '"' => break,
                    '\\' => {
                        contents.push(next);
                        if let Some(escaped) = chars.next() {
                            contents.push(escaped);
                        }
                    }
                    _ => contents.push(next),
                }
            }
            tokens.push(Token::Str(contents));
        } else {
            tokens.push(Token::Punct(c));
        }
    }

    tokens
}

/// Drop whitespace tokens.
pub fn significant(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| !matches!(t, Token::Space(_)))
        .cloned()
        .collect()
}

/// Replacement names; `None` leaves the template name in place.
#[derive(Debug, Clone, Default)]
pub struct TemplateNames {
    pub query_interface: Option<String>,
    pub hook_name: Option<String>,
    pub request_type: Option<String>,
    pub response_type: Option<String>,
    pub query_service_method_name: Option<String>,
    pub key_name: Option<String>,
}

impl TemplateNames {
    pub fn from_record(record: &NamingRecord) -> Self {
        Self {
            query_interface: Some(record.query_interface().to_string()),
            hook_name: Some(record.hook_name().to_string()),
            request_type: Some(record.request_type().to_string()),
            response_type: Some(record.response_type().to_string()),
            query_service_method_name: Some(record.query_service_method_name().to_string()),
            key_name: Some(record.key_name().to_string()),
        }
    }

    fn replacement(&self, ident: &str) -> Option<&str> {
        let slot = match ident {
            "UsePoolsQuery" => &self.query_interface,
            "usePools" => &self.hook_name,
            "QueryPoolsRequest" => &self.request_type,
            "QueryPoolsResponse" => &self.response_type,
            "pools" => &self.query_service_method_name,
            _ => return None,
        };
        slot.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct TemplateRewriter {
    tokens: Vec<Token>,
}

impl TemplateRewriter {
    pub fn parse(src: &str) -> Self {
        Self {
            tokens: tokenize(src),
        }
    }

    pub fn pools() -> Self {
        Self::parse(POOLS_TEMPLATE)
    }

    /// Template tokens with every known name replaced.
    pub fn rewrite(&self, names: &TemplateNames) -> Vec<Token> {
        self.tokens
            .iter()
            .map(|token| match token {
                Token::Ident(ident) => names
                    .replacement(ident)
                    .map_or_else(|| token.clone(), |name| Token::Ident(name.to_string())),
                Token::Str(s) if s == "poolsQuery" => names
                    .key_name
                    .as_ref()
                    .map_or_else(|| token.clone(), |key| Token::Str(key.clone())),
                _ => token.clone(),
            })
            .collect()
    }

    /// Rewritten template as source text, whitespace preserved.
    pub fn render(&self, names: &TemplateNames) -> String {
        self.rewrite(names).iter().map(Token::text).collect()
    }
}

/// Unified line diff of two sources, for assertion messages.
pub fn diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .header("template", "synthesized")
        .to_string()
}
