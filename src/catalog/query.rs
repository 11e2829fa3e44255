// src/catalog/query.rs

/// What a menu entry needs from the user before it can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    None,
    Author,
    Tag,
    Count,
}

/// Menu-level identifier of a catalog query (no parameter attached yet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    ByAuthor,
    RandomN,
    RandomOne,
    TotalCount,
    ByTag,
    TopAuthors,
    CommentsForRandomQuote,
    AuthorBio,
    AllQuotes,
    Surprise,
}

use QueryKind::*;

impl QueryKind {
    /// Menu order.
    pub const ALL: [QueryKind; 10] = [
        ByAuthor,
        RandomN,
        RandomOne,
        TotalCount,
        ByTag,
        TopAuthors,
        CommentsForRandomQuote,
        AuthorBio,
        AllQuotes,
        Surprise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ByAuthor => "Select Quotes by Author",
            RandomN => "Get X Random Quotes",
            RandomOne => "Get one Random Quote",
            TotalCount => "Get total amount of Quotes",
            ByTag => "Select Quotes by Tag",
            TopAuthors => "Get Top 5 Authors",
            CommentsForRandomQuote => "Get all the comments of a Random Quote",
            AuthorBio => "Get Author Bio",
            AllQuotes => "Get All Quotes",
            Surprise => "Surprise !",
        }
    }

    /// Stable identifier for logs and status lines.
    pub fn id(self) -> &'static str {
        match self {
            ByAuthor => "quotes_by_author",
            RandomN => "x_quotes",
            RandomOne => "random_quote",
            TotalCount => "total_quotes",
            ByTag => "quotes_by_tag",
            TopAuthors => "top5_authors",
            CommentsForRandomQuote => "comments_random_quote",
            AuthorBio => "author_bio",
            AllQuotes => "all_quotes",
            Surprise => "surprise",
        }
    }

    pub fn param(self) -> ParamKind {
        match self {
            ByAuthor | AuthorBio => ParamKind::Author,
            ByTag => ParamKind::Tag,
            RandomN => ParamKind::Count,
            RandomOne | TotalCount | TopAuthors | CommentsForRandomQuote | AllQuotes | Surprise => {
                ParamKind::None
            }
        }
    }

    /// The runnable query, for kinds that take no parameter.
    pub fn without_param(self) -> Option<Query> {
        match self {
            RandomOne => Some(Query::RandomOne),
            TotalCount => Some(Query::TotalCount),
            TopAuthors => Some(Query::TopAuthors),
            CommentsForRandomQuote => Some(Query::CommentsForRandomQuote),
            AllQuotes => Some(Query::AllQuotes),
            Surprise => Some(Query::Surprise),
            ByAuthor | AuthorBio | ByTag | RandomN => None,
        }
    }

    /// Attach a textual choice (author or tag name). `None` for other kinds.
    pub fn with_name(self, name: String) -> Option<Query> {
        match self {
            ByAuthor => Some(Query::ByAuthor(name)),
            AuthorBio => Some(Query::AuthorBio(name)),
            ByTag => Some(Query::ByTag(name)),
            _ => None,
        }
    }
}

/// A runnable catalog query, carrying its parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    ByAuthor(String),
    RandomN(u32),
    RandomOne,
    TotalCount,
    ByTag(String),
    TopAuthors,
    CommentsForRandomQuote,
    AuthorBio(String),
    AllQuotes,
    Surprise,
}

impl Query {
    pub fn kind(&self) -> QueryKind {
        match self {
            Query::ByAuthor(_) => ByAuthor,
            Query::RandomN(_) => RandomN,
            Query::RandomOne => RandomOne,
            Query::TotalCount => TotalCount,
            Query::ByTag(_) => ByTag,
            Query::TopAuthors => TopAuthors,
            Query::CommentsForRandomQuote => CommentsForRandomQuote,
            Query::AuthorBio(_) => AuthorBio,
            Query::AllQuotes => AllQuotes,
            Query::Surprise => Surprise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterless_kinds_build_queries() {
        for kind in QueryKind::ALL {
            match kind.param() {
                ParamKind::None => {
                    let q = kind.without_param().expect("parameterless kind");
                    assert_eq!(q.kind(), kind);
                }
                _ => assert!(kind.without_param().is_none(), "{kind:?} needs a parameter"),
            }
        }
    }

    #[test]
    fn names_attach_only_to_name_kinds() {
        assert_eq!(ByTag.with_name(s!("life")), Some(Query::ByTag(s!("life"))));
        assert_eq!(AuthorBio.with_name(s!("X")).map(|q| q.kind()), Some(AuthorBio));
        assert_eq!(RandomN.with_name(s!("3")), None);
        assert_eq!(TotalCount.with_name(s!("x")), None);
    }
}
