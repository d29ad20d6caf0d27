mod parameter_form;

pub use parameter_form::{
    Coefficient, FieldKey, INVALID_INPUT_MESSAGE, InvalidNumericInput, ParameterForm,
};
