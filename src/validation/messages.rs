//! Default error messages shown next to form fields.
//!
//! The dashboard is localized in Vietnamese; callers pass these constants to
//! the rules in [`crate::validation::rules`]. Templates use `{min}`/`{max}`
//! placeholders where the rule substitutes the configured bound.

/// Pig pen: name missing.
pub const PEN_NAME_REQUIRED: &str = "Tên chuồng không được để trống";
/// Pig pen: name over the length limit.
pub const PEN_NAME_TOO_LONG: &str = "Tên chuồng không được vượt quá {max} ký tự";
/// Pig pen: creation date missing.
pub const PEN_CREATED_DATE_REQUIRED: &str = "Ngày tạo chuồng không được để trống";
/// Pig pen: creation date lies in the future.
pub const PEN_CREATED_DATE_FUTURE: &str = "Ngày tạo không được là ngày trong tương lai";
/// Pig pen: closing date precedes the creation date.
pub const PEN_CLOSED_BEFORE_CREATED: &str = "Ngày đóng chuồng phải sau ngày tạo chuồng";
/// Pig pen: negative animal quantity.
pub const PEN_QUANTITY_NEGATIVE: &str = "Số lượng không được âm";
/// Pig pen: quantity outside the allowed range.
pub const PEN_QUANTITY_RANGE: &str = "Số lượng phải nằm trong khoảng {min} đến {max}";

/// Employee: full name missing.
pub const EMPLOYEE_FULL_NAME_REQUIRED: &str = "Họ tên không được để trống";
/// Employee: username missing.
pub const EMPLOYEE_USERNAME_REQUIRED: &str = "Tên đăng nhập không được để trống";
/// Employee: email missing.
pub const EMPLOYEE_EMAIL_REQUIRED: &str = "Email không được để trống";
/// Employee: email fails the format check.
pub const EMPLOYEE_EMAIL_INVALID: &str = "Email không hợp lệ";
/// Employee: birth date missing.
pub const EMPLOYEE_BIRTH_DATE_REQUIRED: &str = "Ngày sinh không được để trống";
/// Employee: younger than the minimum working age.
pub const EMPLOYEE_UNDERAGE: &str = "Nhân viên phải đủ 18 tuổi";
/// Employee: ID card number missing.
pub const EMPLOYEE_ID_CARD_REQUIRED: &str = "Số CMND/CCCD không được để trống";
/// Employee: ID card number fails the format check.
pub const EMPLOYEE_ID_CARD_INVALID: &str = "Số CMND/CCCD không hợp lệ";

/// Animal: name missing.
pub const ANIMAL_NAME_REQUIRED: &str = "Tên vật nuôi không được để trống";
/// Animal: name over the length limit.
pub const ANIMAL_NAME_TOO_LONG: &str = "Tên vật nuôi không được vượt quá {max} ký tự";
/// Animal: entry date missing.
pub const ANIMAL_ENTRY_DATE_REQUIRED: &str = "Ngày nhập chuồng không được để trống";
/// Animal: entry date lies in the future.
pub const ANIMAL_ENTRY_DATE_FUTURE: &str = "Ngày nhập chuồng không được là ngày trong tương lai";
/// Animal: exit date precedes the entry date.
pub const ANIMAL_EXIT_BEFORE_ENTRY: &str = "Ngày xuất chuồng phải sau ngày nhập chuồng";
/// Animal: status missing.
pub const ANIMAL_STATUS_REQUIRED: &str = "Trạng thái không được để trống";
/// Animal: status outside the accepted vocabulary.
pub const ANIMAL_STATUS_INVALID: &str = "Trạng thái không hợp lệ";
/// Animal: weight missing.
pub const ANIMAL_WEIGHT_REQUIRED: &str = "Cân nặng không được để trống";
/// Animal: weight is zero or negative.
pub const ANIMAL_WEIGHT_NOT_POSITIVE: &str = "Cân nặng phải lớn hơn 0";
/// Animal: weight outside the allowed range.
pub const ANIMAL_WEIGHT_RANGE: &str = "Cân nặng phải nằm trong khoảng {min} đến {max} kg";
/// Animal: pen assignment missing.
pub const ANIMAL_PEN_REQUIRED: &str = "Vui lòng chọn chuồng nuôi";
