use chrono::NaiveDate;
use cyberfit_pro::domain::{ProfileType, Registration, RegistrationForm};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn form_from_json(json: &str) -> RegistrationForm {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_student_from_json_form() {
    let form = form_from_json(
        r#"{
            "profile_type": "aluno",
            "email": "joao@example.com",
            "full_name": "João Pereira",
            "telefone": "(85) 98831-8679",
            "password": "Academia1",
            "cpf": "529.982.247-25",
            "birth_date": "2001-09-30",
            "token": "instr-7f2"
        }"#,
    );

    let reg = Registration::from_form(form, today()).unwrap();
    assert_eq!(reg.profile_type(), ProfileType::Student);
    assert_eq!(reg.account().phone.formatted(), "(85) 98831-8679");

    let json = serde_json::to_value(&reg).unwrap();
    assert_eq!(json["profile_type"], "aluno");
    assert_eq!(json["instructor_token"], "instr-7f2");
    assert_eq!(json["phone"]["digits"], "85988318679");
}

#[test]
fn test_gym_does_not_require_cpf_or_birth_date() {
    let form = form_from_json(
        r#"{
            "profile_type": "academia",
            "email": "contato@cyberfit.com.br",
            "full_name": "CyberFit Centro",
            "phone": "8533218679",
            "password": "Academia1",
            "cnpj": "11222333000181",
            "address": "Rua Dragão do Mar, 81"
        }"#,
    );

    let reg = Registration::from_form(form, today()).unwrap();
    match &reg {
        Registration::Gym { cnpj, address, .. } => {
            assert_eq!(cnpj.formatted(), "11.222.333/0001-81");
            assert_eq!(address, "Rua Dragão do Mar, 81");
        }
        other => panic!("expected gym, got {:?}", other),
    }
    assert_eq!(reg.table_name(), "academias");
}

#[test]
fn test_gym_rejects_cpf_in_place_of_cnpj() {
    let form = form_from_json(
        r#"{
            "profile_type": "academia",
            "email": "contato@cyberfit.com.br",
            "full_name": "CyberFit Centro",
            "phone": "8533218679",
            "password": "Academia1",
            "cpf": "111.444.777-35",
            "address": "Rua A, 1"
        }"#,
    );

    let err = Registration::from_form(form, today()).unwrap_err();
    let fields: Vec<&str> = err.fields().iter().map(|f| f.field).collect();
    assert_eq!(fields, vec!["cnpj"]);
    assert_eq!(err.fields()[0].issue, "CNPJ is required");
}

#[test]
fn test_weak_password_reported_with_reason() {
    let form = form_from_json(
        r#"{
            "profile_type": "instrutor",
            "email": "coach@example.com",
            "full_name": "Ana Costa",
            "phone": "85988318679",
            "password": "academia1",
            "cpf": "11144477735",
            "cref": "000123-G/CE"
        }"#,
    );

    let err = Registration::from_form(form, today()).unwrap_err();
    assert_eq!(err.fields().len(), 1);
    assert_eq!(err.fields()[0].field, "password");
    assert!(err.fields()[0].issue.contains("uppercase"));
}

#[test]
fn test_birth_date_today_is_accepted() {
    let form = form_from_json(
        r#"{
            "profile_type": "aluno",
            "email": "bebe@example.com",
            "full_name": "Bebê Souza",
            "phone": "85988318679",
            "password": "Academia1",
            "cpf": "111.444.777-35",
            "birth_date": "2025-01-15"
        }"#,
    );
    assert!(Registration::from_form(form, today()).is_ok());
}
