//! Config derive macro - generates FIELDS and template().
//!
//! Field paths feed diagnostics; templates feed `waypost init`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, Meta, Type};

// ============================================================================
// field info
// ============================================================================

/// Parsed field information.
struct FieldInfo {
    name: syn::Ident,
    toml_name: String,
    doc: Option<String>,
    inline_doc: Option<String>,
    default: Option<String>,
    skip: bool,
    hidden: bool,
    sub: bool,
    ty: Type,
}

impl FieldInfo {
    fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            toml_name: get_string_attr(attrs, "name").unwrap_or_else(|| ident.to_string()),
            doc: extract_doc_comment(attrs),
            inline_doc: get_string_attr(attrs, "inline_doc"),
            default: get_string_attr(attrs, "default"),
            skip: has_attr(attrs, "skip"),
            hidden: has_attr(attrs, "hidden"),
            sub: has_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }
}

// ============================================================================
// attribute parsing
// ============================================================================

/// Get string value from #[config(key = "value")].
fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Check if attribute has a flag like #[config(skip)].
fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            // Skip value if present (e.g., `default = "en"`)
            if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

/// Extract doc comment from #[doc = "..."] attributes.
fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}

// ============================================================================
// type helpers
// ============================================================================

fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name (`FooterConfig` → `footer`).
fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Format default value based on field type.
/// String/PathBuf/enum types get quoted, numeric/bool are used as-is.
fn format_default_for_type(value: &str, ty: &str) -> String {
    match ty {
        "String" | "PathBuf" => format!("\"{value}\""),
        _ if !ty.starts_with("Option<")
            && !ty.starts_with("Vec<")
            && !ty.ends_with("Config")
            && !matches!(
                ty,
                "bool"
                    | "u8"
                    | "u16"
                    | "u32"
                    | "u64"
                    | "usize"
                    | "i8"
                    | "i16"
                    | "i32"
                    | "i64"
                    | "isize"
                    | "f32"
                    | "f64"
            ) =>
        {
            format!("\"{value}\"")
        }
        _ => value.to_string(),
    }
}

// ============================================================================
// template generation
// ============================================================================

/// Generate TOML template code for a single field.
fn field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    // Doc comment lines become `# ` comments above the field
    let doc_code = if let Some(ref doc) = info.doc {
        let doc_lines: Vec<_> = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        let doc_str = doc_lines.join("");
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    // Sub config: recurse into its own headed template
    if info.sub {
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            #doc_code
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    let ty_str = type_to_string(&info.ty);
    let is_optional = ty_str.starts_with("Option<");

    let inline_suffix = info
        .inline_doc
        .as_ref()
        .map(|c| format!("  # {c}"))
        .unwrap_or_default();

    // Optional fields without an explicit default: commented-out placeholder
    if is_optional && info.default.is_none() {
        let line = format!("# {toml_name} = \"\"{inline_suffix}\n");
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Explicit default value (compile-time known)
    if let Some(ref default_val) = info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let line = format!("{toml_name} = {formatted}{inline_suffix}\n");
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Fall back to the runtime Default::default() value
    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#inline_suffix);
        out.push('\n');
    }
}

// ============================================================================
// derive entry point
// ============================================================================

/// Generate Config implementation (FIELDS + template).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{name}Fields"), name.span());

    let section =
        get_string_attr(&input.attrs, "section").unwrap_or_else(|| infer_section(&name.to_string()));

    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields.iter().filter_map(FieldInfo::from_field).collect();

    // FIELDS struct (skip fields with #[config(skip)])
    let fields_for_path: Vec<_> = field_infos.iter().filter(|f| !f.skip).collect();

    let field_defs = fields_for_path.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = fields_for_path.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.toml_name.clone()
        } else {
            format!("{}.{}", section, f.toml_name)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    // Template code (skip hidden and skipped fields)
    let template_code: Vec<_> = field_infos
        .iter()
        .filter(|f| !f.skip && !f.hidden)
        .map(field_template_code)
        .collect();

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Generate TOML template for this config section.
            #[allow(unused_variables)]
            pub fn template() -> String {
                let default = Self::default();
                let mut out = String::new();
                #(#template_code)*
                out
            }

            /// Generate TOML template with section header.
            pub fn template_with_header() -> String {
                let mut out = String::new();
                let doc = Self::TEMPLATE_DOC;
                if !doc.is_empty() {
                    for line in doc.lines() {
                        out.push_str("# ");
                        out.push_str(line.trim());
                        out.push('\n');
                    }
                }
                let section = Self::TEMPLATE_SECTION;
                if !section.is_empty() {
                    out.push('[');
                    out.push_str(section);
                    out.push_str("]\n");
                }
                out.push_str(&Self::template());
                out
            }
        }
    }
}
