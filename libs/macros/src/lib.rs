use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::{quote, ToTokens};
use syn::{
    ext::IdentExt, parse, parse_quote, Data, DeriveInput, Error, Fields, FnArg::Typed,
    GenericParam, ItemFn, LitStr, Pat::Ident,
};

/// Wraps a function so that its arguments and its result are logged at trace level
/// under the given log target.
#[proc_macro_attribute]
pub fn traced(attrs: TokenStream, item: TokenStream) -> TokenStream {
    let target: Literal = match parse(attrs) {
        Ok(lit) => lit,
        _ => panic!("#[traced] must be applied with one string argument specifying the log target"),
    };

    let mut fun: ItemFn = match parse(item) {
        Ok(fun) => fun,
        Err(..) => panic!("#[traced] must be applied on functions"),
    };

    let args = fun
        .sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            Typed(pat) => match &*pat.pat {
                Ident(ident) => Some(ident),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>();

    let name = &fun.sig.ident;
    let fmt_before = format!("{}{{:?}}", name);
    let fmt_after = format!("{}{{:?}} -> {{:?}}", name);
    let stmts = &fun.block.stmts;
    let block = quote! {{
        log::trace!(target: #target, #fmt_before, (#(#args,)*));
        let result = { #(#stmts)* };
        log::trace!(target: #target, #fmt_after, (#(#args,)*), result);
        result
    }
    };

    fun.block = parse(block.into()).expect("should parse");
    fun.to_token_stream().into()
}

/// Derives `quarry::Record` for a struct with named fields.
///
/// Every field becomes a column rendered through its `FieldPrinter` rule.
/// `#[record(table = "...")]` on the struct overrides the table name (default: the
/// struct name in snake case), `#[record(rename = "...")]` on a field overrides the
/// column name and `#[record(skip)]` leaves the field out of the dump.
/// Raw identifiers lose their `r#` prefix, e.g. field `r#type` becomes column `type`.
///
/// Type parameters of generic records are required to be `'static`, and every
/// dumped field type must implement `FieldPrinter`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(item: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse(item) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error().into(),
    };

    match expand_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_record(input: &DeriveInput) -> Result<proc_macro2::TokenStream, Error> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new_spanned(
                    &input.ident,
                    "#[derive(Record)] requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "#[derive(Record)] can only be applied to structs",
            ))
        }
    };

    let mut table = snake_case(&input.ident.unraw().to_string());
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let name: LitStr = meta.value()?.parse()?;
                table = name.value();
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute, expected `table`"))
            }
        })?;
    }

    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(param) = param {
            param.bounds.push(parse_quote!('static));
        }
    }

    let mut columns = Vec::new();
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;

        let mut column = ident.unraw().to_string();
        let mut skip = false;
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("record")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    column = name.value();
                    Ok(())
                } else {
                    Err(meta.error("unsupported record attribute, expected `rename` or `skip`"))
                }
            })?;
        }

        if !skip {
            let ty = &field.ty;
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#ty: ::quarry::FieldPrinter));
            columns.push(quote! {
                .column(::quarry::Column::new(#column, |record: &Self| &record.#ident))
            });
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::quarry::Record for #name #ty_generics #where_clause {
            fn table() -> ::quarry::Table<Self> {
                ::quarry::Table::new(#table)
                    #(#columns)*
            }
        }
    })
}

/// Acronyms stay together: `HTTPRequest` becomes `http_request`.
fn snake_case(name: &str) -> String {
    let chars = name.chars().collect::<Vec<_>>();
    let mut result = String::with_capacity(name.len() + 4);
    for (index, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let previous = index.checked_sub(1).map(|index| chars[index]);
            let next = chars.get(index + 1);
            let after_word = previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
            let before_word = previous.is_some_and(|p| p.is_uppercase())
                && next.is_some_and(|n| n.is_lowercase());
            if after_word || before_word {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
