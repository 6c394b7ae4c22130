use url::Url;

use super::Query;

/// Query for `/admin/access-modules`. Both flags default to `true`.
#[derive(Clone, Copy, Debug)]
pub struct AccessModuleQuery {
    pub include_submodules: bool,
    pub include_entries: bool,
}

impl Default for AccessModuleQuery {
    fn default() -> Self {
        Self {
            include_submodules: true,
            include_entries: true,
        }
    }
}

impl Query for AccessModuleQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("includeSubmodules", &self.include_submodules.to_string())
            .append_pair("includeEntries", &self.include_entries.to_string());
        url
    }
}

impl AccessModuleQuery {
    pub fn with_submodules(mut self, include: bool) -> Self {
        self.include_submodules = include;
        self
    }

    pub fn with_entries(mut self, include: bool) -> Self {
        self.include_entries = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{AccessModuleQuery, Query};

    #[test]
    fn test_access_module_query() {
        let url = Url::parse("https://example.com/admin/access-modules").unwrap();

        insta::assert_snapshot!(
            AccessModuleQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/admin/access-modules?includeSubmodules=true&includeEntries=true"
        );

        insta::assert_snapshot!(
            AccessModuleQuery::default()
                .with_submodules(false)
                .with_entries(true)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/admin/access-modules?includeSubmodules=false&includeEntries=true"
        );
    }
}
