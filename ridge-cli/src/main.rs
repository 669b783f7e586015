//! ridge command-line front end
//!
//! Reads HTML from a file or stdin and writes JSON, HTML or Pug.
//!
//! Debug features:
//! - `--tokens`: dump the lexer output
//! - `--tree`: print the raw tree
//! - `--issues`: report every recovery from malformed input

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use ridge_common::warning::{clear_warnings, warn_once};
use ridge_dom::{Node, print_tree};
use ridge_format::{
    CellFormatter, CellOptions, PairsFormatter, SemanticFormatter, StringifyOptions,
    TranslateOptions, stringify, translate,
};
use ridge_html::{Formatter, Lexer, ParseIssue, ParseOptions, Token};
use serde::Serialize;

/// ridge: forgiving HTML to JSON, HTML or Pug
#[derive(Parser, Debug)]
#[command(name = "ridge")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Key/value JSON on stdout
    ridge page.html

    # Object-shaped JSON written to a file
    ridge --format semantic page.html page.json

    # Cell-shaped JSON with trimmed text
    ridge --format cell --trim page.html

    # Re-emit normalized HTML from stdin
    cat page.html | ridge --emit html --double-quotes

    # Convert to Pug with four-space indentation
    ridge --emit pug --indent '    ' page.html

    # Inspect how a snippet is lexed and parsed
    echo '<ul><li>a<li>b</ul>' | ridge --tokens --tree --issues
"#)]
struct Cli {
    /// HTML file to read; `-` or nothing reads stdin
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// File to write; nothing writes stdout
    #[arg(value_name = "DEST")]
    dest: Option<PathBuf>,

    /// JSON shape of the tree
    #[arg(short, long, value_enum, default_value_t = Shape::Pairs)]
    format: Shape,

    /// Output language
    #[arg(short, long, value_enum, default_value_t = Emit::Json)]
    emit: Emit,

    /// Prefer double quotes around attribute values (html output)
    #[arg(long)]
    double_quotes: bool,

    /// Trim text and drop whitespace-only runs (cell format)
    #[arg(long)]
    trim: bool,

    /// Keep tag names in source casing (cell format)
    #[arg(long)]
    keep_tag_case: bool,

    /// Close void tags explicitly (html output)
    #[arg(long)]
    xml: bool,

    /// Doctype keyword to write (pug output)
    #[arg(long, value_name = "NAME")]
    doctype: Option<String>,

    /// One level of indentation (pug output)
    #[arg(long, value_name = "STRING", default_value = "  ")]
    indent: String,

    /// Print the token stream before the output
    #[arg(long)]
    tokens: bool,

    /// Print the raw tree before the output
    #[arg(long)]
    tree: bool,

    /// Report recoveries from malformed input on stderr
    #[arg(long)]
    issues: bool,
}

/// JSON tree shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Shape {
    /// Untouched tags and raw attribute strings
    Raw,
    /// Lower-cased tags, attributes as key/value pairs
    Pairs,
    /// Lower-cased tags, attributes as a camel-cased object
    Semantic,
    /// A root cell with element cells in `$components` and text in `$html`
    Cell,
}

/// Output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// The tree as JSON, shaped by `--format`
    Json,
    /// HTML rebuilt from the key/value shape
    Html,
    /// Pug rendered from the object shape
    Pug,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    let source = read_source(cli.file.as_deref())?;
    let options = ParseOptions::default();

    let mut lexer = Lexer::new(&source, &options);
    lexer.run();
    let (tokens, mut issues) = lexer.into_parts();
    if cli.tokens {
        print_tokens(&tokens);
    }

    let (nodes, parse_issues) = ridge_html::Parser::new(tokens, &options).run_with_issues();
    issues.extend(parse_issues);
    if cli.tree {
        println!("{}", "=== Raw Tree ===".bold());
        print_tree(&nodes, 0);
    }
    if cli.issues {
        report_issues(&issues);
    }

    let output = render(&cli, nodes, &options)?;
    write_output(cli.dest.as_deref(), &output)
}

/// Read the whole input, from stdin when no file (or `-`) is given
fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            let _ = io::stdin()
                .read_to_string(&mut source)
                .context("failed to read HTML from stdin")?;
            Ok(source)
        }
    }
}

fn write_output(dest: Option<&Path>, output: &str) -> Result<()> {
    match dest {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))
        }
        None => io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("failed to write to stdout"),
    }
}

fn print_tokens(tokens: &[Token]) {
    println!("{}", "=== Tokens ===".bold());
    for (index, token) in tokens.iter().enumerate() {
        println!("{:>5}  {token}", index.dimmed());
    }
}

fn report_issues(issues: &[ParseIssue]) {
    for issue in issues {
        let component = if issue.kind.is_lexical() { "Lexer" } else { "Parser" };
        warn_once(component, &issue.to_string());
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
    json.push('\n');
    Ok(json)
}

/// Shape and serialize the tree as the CLI options ask
fn render(cli: &Cli, nodes: Vec<Node>, options: &ParseOptions) -> Result<String> {
    match cli.emit {
        Emit::Json => match cli.format {
            Shape::Raw => to_json(&nodes),
            Shape::Pairs => to_json(&pairs(nodes, options)),
            Shape::Semantic => to_json(&semantic(nodes, options)?),
            Shape::Cell => to_json(&cell(cli, nodes, options)),
        },
        Emit::Html => {
            let stringify_options = StringifyOptions {
                prefer_double_quote_attributes: cli.double_quotes,
                xml: cli.xml,
                ..StringifyOptions::default()
            };
            Ok(stringify::to_html(&pairs(nodes, options), &stringify_options))
        }
        Emit::Pug => {
            let translate_options = TranslateOptions {
                doctype: cli.doctype.clone(),
                indentation: cli.indent.clone(),
                ..TranslateOptions::default()
            };
            let mut pug = translate::to_pug(&semantic(nodes, options)?, &translate_options);
            pug.push('\n');
            Ok(pug)
        }
    }
}

fn pairs(nodes: Vec<Node>, options: &ParseOptions) -> Vec<ridge_format::pairs::Node> {
    match PairsFormatter.format(nodes, options) {
        Ok(nodes) => nodes,
        Err(never) => match never {},
    }
}

fn cell(cli: &Cli, nodes: Vec<Node>, options: &ParseOptions) -> ridge_format::cell::RootCell {
    let formatter = CellFormatter::new(CellOptions {
        trim: cli.trim,
        lower_case_tag: !cli.keep_tag_case,
        ..CellOptions::default()
    });
    match formatter.format(nodes, options) {
        Ok(root) => root,
        Err(never) => match never {},
    }
}

fn semantic(nodes: Vec<Node>, options: &ParseOptions) -> Result<Vec<ridge_format::semantic::Node>> {
    SemanticFormatter
        .format(nodes, options)
        .context("failed to format attributes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridge_html::parse_raw;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ridge").chain(args.iter().copied())).unwrap()
    }

    fn run(args: &[&str], html: &str) -> Result<String> {
        let options = ParseOptions::default();
        render(&cli(args), parse_raw(html, &options), &options)
    }

    #[test]
    fn defaults_to_pairs_json() {
        let parsed = cli(&["in.html", "out.json"]);
        assert_eq!(parsed.format, Shape::Pairs);
        assert_eq!(parsed.emit, Emit::Json);
        assert_eq!(parsed.dest.as_deref(), Some(Path::new("out.json")));
        assert_eq!(parsed.indent, "  ");

        let json = run(&[], "<B x>y</B>").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["tagName"], "b");
        assert_eq!(value[0]["attributes"][0]["value"], serde_json::Value::Null);
    }

    #[test]
    fn emits_html_and_pug() {
        assert_eq!(
            run(&["--emit", "html", "--double-quotes"], "<p class='a'>x</p>").unwrap(),
            "<p class=\"a\">x</p>"
        );
        assert_eq!(
            run(&["--emit", "pug"], "<p class='a'>x</p>").unwrap(),
            "p.a x\n"
        );
    }

    #[test]
    fn semantic_errors_carry_context() {
        let error = run(&["--format", "semantic"], "<p =1></p>").unwrap_err();
        assert_eq!(error.to_string(), "failed to format attributes");
    }

    #[test]
    fn emits_cell_json() {
        let json = run(&["--format", "cell", "--trim", "--keep-tag-case"], "<Div>\n x \n</Div>")
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["class"], "cell-root");
        assert_eq!(value["$components"][0]["$type"], "Div");
        assert_eq!(value["$components"][0]["$html"], "x");
    }

    #[test]
    fn rejects_unknown_format() {
        let args = ["ridge", "--format", "xml"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
