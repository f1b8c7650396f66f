//! Parse command implementation.

use flatmatter_core::config::types::{OutputFormat, ResolvedConfig};
use flatmatter_core::{FlatMatter, ToJson, ToYaml};

use super::{fail, read_input};
use crate::{functions, ParseArgs};

pub fn run(rc: &ResolvedConfig, args: ParseArgs) {
    let content = read_input(args.path.as_deref()).unwrap_or_else(|e| {
        fail(format!("failed to read {}: {e}", describe(args.path.as_deref())))
    });

    let mut options = rc.parse;
    if args.strict {
        options.strict = true;
    }
    if let Some(merge) = args.merge {
        options.merge = merge.into();
    }

    let registry = functions::registry();
    let doc = FlatMatter::parse_with(&content, &registry, options).unwrap_or_else(|e| fail(e));

    let format = args.format.map_or(rc.output.format, Into::into);
    let rendered = match format {
        OutputFormat::Json => doc.serialize(&ToJson::new()),
        OutputFormat::Pretty => doc.serialize(&ToJson::pretty()),
        OutputFormat::Yaml => doc.serialize(&ToYaml),
    };

    match rendered {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => fail(e),
    }
}

fn describe(path: Option<&std::path::Path>) -> String {
    path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}
