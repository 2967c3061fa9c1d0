use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::parser::PageRequest;

lazy_static! {
    static ref DIGITS_ONLY: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Column size of `customer.name`.
pub const NAME_COLUMN_LENGTH: usize = 100;
/// Column size of `customer.tel`.
pub const TEL_COLUMN_LENGTH: usize = 20;

/// Persistent customer row. `id` is `None` until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub id: Option<i64>,
    pub name: String,
    pub tel: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, tel: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            tel: tel.into(),
        }
    }

    pub fn with_id(id: i64, name: impl Into<String>, tel: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            tel: tel.into(),
        }
    }

    pub fn to_dto(&self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            name: self.name.clone(),
            tel: self.tel.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Option<i64>,
    pub name: String,
    pub tel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerInsertRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "이름을 입력해주세요."),
        length(max = 5, message = "이름은 5자리 이내로 입력해주세요.")
    )]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "휴대폰 번호를 입력해주세요."),
        regex(path = *DIGITS_ONLY, message = "휴대폰번호는 숫자로만 입력해주세요."),
        length(max = 11, message = "휴대폰 번호는 12자리 이내로 입력해주세요.")
    )]
    pub tel: String,
}

// Update carries no size caps, unlike insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerUpdateRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "이름을 입력해주세요."))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "휴대폰 번호를 입력해주세요."),
        regex(path = *DIGITS_ONLY, message = "휴대폰번호는 숫자로만 입력해주세요.")
    )]
    pub tel: String,
}

impl CustomerInsertRequest {
    pub fn new(name: impl Into<String>, tel: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tel: tel.into(),
        }
    }
}

impl CustomerUpdateRequest {
    pub fn new(name: impl Into<String>, tel: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tel: tel.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Field order in which validation failures are reported.
const FIELD_ORDER: [&str; 2] = ["name", "tel"];
/// Rule order within a single field.
const RULE_ORDER: [&str; 3] = ["not_blank", "regex", "length"];

/// Picks the single message reported for a failed request body: the first
/// failing rule of the first failing field.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    for field in FIELD_ORDER {
        let Some(failures) = field_errors.get(field) else {
            continue;
        };
        let chosen = RULE_ORDER
            .iter()
            .find_map(|rule| failures.iter().find(|e| e.code == *rule))
            .or_else(|| failures.first());
        if let Some(failure) = chosen {
            return failure
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
        }
    }

    errors.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortInfo {
    pub empty: bool,
    pub sorted: bool,
    pub unsorted: bool,
}

impl SortInfo {
    fn from_request(request: &PageRequest) -> Self {
        let sorted = !request.sort.is_empty();
        Self {
            empty: !sorted,
            sorted,
            unsorted: !sorted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: i64,
    pub page_size: i64,
    pub offset: i64,
    pub sort: SortInfo,
    pub paged: bool,
    pub unpaged: bool,
}

/// One slice of a listing plus the metadata clients use to walk the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub last: bool,
    pub total_pages: i64,
    pub total_elements: i64,
    pub size: i64,
    pub number: i64,
    pub sort: SortInfo,
    pub first: bool,
    pub number_of_elements: i64,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let size = request.size;
        let number = request.page;
        let total_pages = if size > 0 {
            (total_elements + size - 1) / size
        } else {
            0
        };
        let sort = SortInfo::from_request(request);
        let number_of_elements = content.len() as i64;

        Self {
            pageable: Pageable {
                page_number: number,
                page_size: size,
                offset: request.offset(),
                sort: sort.clone(),
                paged: true,
                unpaged: false,
            },
            last: number.saturating_add(1) >= total_pages,
            total_pages,
            total_elements,
            size,
            number,
            sort,
            first: number == 0,
            number_of_elements,
            empty: content.is_empty(),
            content,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
            last: self.last,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            size: self.size,
            number: self.number,
            sort: self.sort,
            first: self.first,
            number_of_elements: self.number_of_elements,
            empty: self.empty,
        }
    }
}
