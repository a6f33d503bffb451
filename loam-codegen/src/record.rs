//! Implementation of the `#[derive(Record)]` macro.

use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

/// Parse and generate code for the `#[derive(Record)]` macro.
pub fn derive_record_impl(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let name = &input.ident;
    let model = name.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record derive only supports structs",
            ));
        }
    };

    let struct_attrs = parse_struct_attrs(input)?;
    let field_infos: Vec<FieldInfo> = fields.iter().map(parse_field).collect::<Result<_, _>>()?;

    let id_field = find_id_field(input, &field_infos)?;
    let id_name = id_field.name.clone();

    let specs: Vec<_> = field_infos
        .iter()
        .map(|f| {
            let field_name = f.name.to_string();
            let column = &f.column;
            let kind = f.scalar.kind_tokens();
            quote! {
                ::loam::FieldSpec {
                    name: #field_name,
                    column: #column,
                    kind: #kind,
                }
            }
        })
        .collect();

    let to_row_entries: Vec<_> = field_infos
        .iter()
        .map(|f| {
            let column = &f.column;
            let value = f.scalar.to_value_expr(&f.name);
            quote! { row.set(#column, #value); }
        })
        .collect();

    let load_arms: Vec<_> = field_infos
        .iter()
        .map(|f| {
            let column = &f.column;
            let assign = f.scalar.load_stmt(&f.name);
            quote! { #column => { #assign } }
        })
        .collect();

    let table_name_fn = struct_attrs.table_name.map(|table| {
        quote! {
            fn table_name() -> ::std::string::String {
                #table.to_string()
            }
        }
    });

    Ok(quote! {
        impl ::loam::Record for #name {
            const MODEL: &'static str = #model;

            const FIELDS: &'static [::loam::FieldSpec] = &[
                #(#specs,)*
            ];

            #table_name_fn

            fn to_row(&self) -> ::loam::Row {
                let mut row = ::loam::Row::new();
                #(#to_row_entries)*
                row
            }

            fn load_row(&mut self, row: &::loam::Row) -> ::loam::Result<()> {
                for (column, value) in row.iter() {
                    match column {
                        #(#load_arms)*
                        _ => {}
                    }
                }
                Ok(())
            }

            fn id(&self) -> i64 {
                self.#id_name
            }

            fn set_id(&mut self, id: i64) {
                self.#id_name = id;
            }
        }
    })
}

/// Struct-level attributes parsed from `#[loam(...)]`.
#[derive(Debug, Default)]
struct StructAttrs {
    table_name: Option<String>,
}

fn parse_struct_attrs(input: &DeriveInput) -> Result<StructAttrs, syn::Error> {
    let mut attrs = StructAttrs::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("loam") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let value: LitStr = meta.value()?.parse()?;
                attrs.table_name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported loam attribute; expected `table`"))
            }
        })?;
    }

    Ok(attrs)
}

/// Information about one mapped field.
#[derive(Debug)]
struct FieldInfo {
    name: Ident,
    column: String,
    scalar: Scalar,
    is_id: bool,
}

fn parse_field(field: &syn::Field) -> Result<FieldInfo, syn::Error> {
    let name = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "fields must be named"))?;

    let mut column = name.to_string().to_case(Case::Snake);
    let mut is_id = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("loam") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                is_id = true;
                Ok(())
            } else if meta.path.is_ident("column") {
                let value: LitStr = meta.value()?.parse()?;
                column = value.value();
                Ok(())
            } else {
                Err(meta.error("unsupported loam attribute; expected `id` or `column`"))
            }
        })?;
    }

    let scalar = Scalar::classify(&field.ty).ok_or_else(|| {
        syn::Error::new_spanned(
            &field.ty,
            "unsupported field type for record mapping; supported types are \
             String, bool, i16, i32, i64, f32, f64, and Vec<u8>",
        )
    })?;

    Ok(FieldInfo {
        name,
        column,
        scalar,
        is_id,
    })
}

/// Locate and validate the identity field.
fn find_id_field<'a>(
    input: &DeriveInput,
    fields: &'a [FieldInfo],
) -> Result<&'a FieldInfo, syn::Error> {
    let id_field = fields
        .iter()
        .find(|f| f.is_id)
        .or_else(|| fields.iter().find(|f| f.name == "id"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                input,
                "record must have an `id` field or one marked #[loam(id)]",
            )
        })?;

    if !matches!(id_field.scalar, Scalar::I64) {
        return Err(syn::Error::new_spanned(
            input,
            "the identity field must be an i64",
        ));
    }
    if id_field.column != "id" {
        return Err(syn::Error::new_spanned(
            input,
            "the identity field must map to the `id` column",
        ));
    }

    Ok(id_field)
}

/// The scalar kinds a field can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scalar {
    Text,
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bytes,
}

impl Scalar {
    /// Classify a field type, or `None` if it is unsupported.
    fn classify(ty: &Type) -> Option<Self> {
        let Type::Path(type_path) = ty else {
            return None;
        };
        if type_path.qself.is_some() {
            return None;
        }
        let segment = type_path.path.segments.last()?;

        match segment.ident.to_string().as_str() {
            "String" => Some(Self::Text),
            "bool" => Some(Self::Bool),
            "i16" => Some(Self::I16),
            "i32" => Some(Self::I32),
            "i64" => Some(Self::I64),
            "f32" => Some(Self::F32),
            "f64" => Some(Self::F64),
            "Vec" if is_u8_vec(segment) => Some(Self::Bytes),
            _ => None,
        }
    }

    /// The `FieldKind` tag for the descriptor table.
    fn kind_tokens(self) -> TokenStream {
        match self {
            Self::Text => quote!(::loam::FieldKind::Text),
            Self::Bool => quote!(::loam::FieldKind::Bool),
            Self::I16 | Self::I32 | Self::I64 => quote!(::loam::FieldKind::Int),
            Self::F32 | Self::F64 => quote!(::loam::FieldKind::Float),
            Self::Bytes => quote!(::loam::FieldKind::Bytes),
        }
    }

    /// Expression marshalling the field into a `Value`.
    fn to_value_expr(self, name: &Ident) -> TokenStream {
        match self {
            Self::Text => quote!(::loam::Value::Text(self.#name.clone())),
            Self::Bool => quote!(::loam::Value::Bool(self.#name)),
            Self::I16 | Self::I32 => quote!(::loam::Value::Int(i64::from(self.#name))),
            Self::I64 => quote!(::loam::Value::Int(self.#name)),
            Self::F32 => quote!(::loam::Value::Float(f64::from(self.#name))),
            Self::F64 => quote!(::loam::Value::Float(self.#name)),
            Self::Bytes => quote!(::loam::Value::Bytes(self.#name.clone())),
        }
    }

    /// Statement coercing a `Value` into the field.
    fn load_stmt(self, name: &Ident) -> TokenStream {
        match self {
            Self::Text => quote!(self.#name = value.as_text(column)?;),
            Self::Bool => quote!(self.#name = value.as_bool(column)?;),
            Self::I16 => quote! {
                self.#name = i16::try_from(value.as_int(column)?).map_err(|_| {
                    ::loam::Error::type_coercion(column, "integer out of range for i16")
                })?;
            },
            Self::I32 => quote! {
                self.#name = i32::try_from(value.as_int(column)?).map_err(|_| {
                    ::loam::Error::type_coercion(column, "integer out of range for i32")
                })?;
            },
            Self::I64 => quote!(self.#name = value.as_int(column)?;),
            Self::F32 => quote!(self.#name = value.as_float(column)? as f32;),
            Self::F64 => quote!(self.#name = value.as_float(column)?;),
            Self::Bytes => quote!(self.#name = value.as_bytes(column)?;),
        }
    }
}

/// Check that a `Vec` segment is exactly `Vec<u8>`.
fn is_u8_vec(segment: &syn::PathSegment) -> bool {
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    if args.args.len() != 1 {
        return false;
    }
    matches!(
        &args.args[0],
        syn::GenericArgument::Type(Type::Path(p))
            if p.path.is_ident("u8")
    )
}
