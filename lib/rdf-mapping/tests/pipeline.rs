#![cfg(test)]

use anyhow::Result;
use insta::assert_snapshot;
use rdf_mapping::functions::BuiltinName;
use rdf_mapping::logical::{
    EquiJoinNode, ExecutionOptions, Expression, ExtendNode, JoinAlgorithm, MappingError,
    MappingOperator, MappingPlanBuilder, ProjectNode, SourceNode, UnionNode,
};
use rdf_mapping::model::vocab::xsd;
use rdf_mapping::model::{Literal, MappingTuple, NamedNode, Value};
use rdf_mapping::sources::JsonSource;
use serde_json::json;
use std::sync::Arc;

fn team_source() -> Arc<JsonSource> {
    Arc::new(JsonSource::new(json!({
        "team": [
            { "id": 1, "name": "Alice", "roles": ["Dev", "Admin"] },
            { "id": 2, "name": "Bob", "roles": ["User"] }
        ]
    })))
}

fn team_members() -> Result<MappingOperator> {
    Ok(MappingOperator::Source(SourceNode::try_new(
        team_source(),
        "$.team[*]",
        [("name", ".name"), ("role", ".roles[*]")],
    )?))
}

fn string_literal(value: &str) -> Value {
    Value::from(Literal::new_string_literal(value))
}

fn label_expression() -> Expression {
    Expression::builtin(
        BuiltinName::Concat,
        [
            Expression::reference("name"),
            Expression::constant(": "),
            Expression::reference("role"),
        ],
    )
}

#[test]
fn test_team_labels() -> Result<()> {
    let plan = MappingPlanBuilder::new(team_members()?)
        .extend("label", label_expression())
        .project(["label"])?
        .build();

    let labels = plan
        .execute()?
        .into_iter()
        .map(|tuple| {
            assert_eq!(tuple.len(), 1);
            tuple.get("label").cloned()
        })
        .collect::<Vec<_>>();

    assert_eq!(
        labels,
        [
            Some(string_literal("Alice: Dev")),
            Some(string_literal("Alice: Admin")),
            Some(string_literal("Bob: User")),
        ]
    );
    Ok(())
}

#[test]
fn test_execute_is_repeatable() -> Result<()> {
    let plan = team_members()?.extend("label", label_expression());
    assert_eq!(plan.execute()?, plan.execute()?);
    Ok(())
}

#[test]
fn test_source_cartesian_product() -> Result<()> {
    let source = Arc::new(JsonSource::new(json!({
        "rows": [
            { "a": [1, 2], "b": ["x", "y", "z"] },
            { "a": [3], "b": [] },
            { "a": [4], "b": "w" }
        ]
    })));
    let plan = SourceNode::try_new(source, "$.rows[*]", [("a", "a"), ("b", "b")])?;

    let tuples = plan
        .execute()?
        .into_iter()
        .map(|tuple| tuple.to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        tuples,
        [
            "{a: 1, b: \"x\"}",
            "{a: 1, b: \"y\"}",
            "{a: 1, b: \"z\"}",
            "{a: 2, b: \"x\"}",
            "{a: 2, b: \"y\"}",
            "{a: 2, b: \"z\"}",
            "{a: 4, b: \"w\"}",
        ]
    );
    Ok(())
}

#[test]
fn test_extend_does_not_mutate_input() -> Result<()> {
    let members = Arc::new(team_members()?);
    let extended = MappingOperator::Extend(ExtendNode::new(
        Arc::clone(&members),
        "label",
        label_expression(),
    ));

    let before = members.execute()?;
    let result = extended.execute()?;

    assert_eq!(members.execute()?, before);
    assert!(before.iter().all(|tuple| !tuple.contains_attribute("label")));
    assert!(result.iter().all(|tuple| tuple.contains_attribute("label")));
    Ok(())
}

#[test]
fn test_extend_with_missing_reference_binds_undefined() -> Result<()> {
    let plan = team_members()?.extend(
        "nickname_label",
        Expression::builtin(
            BuiltinName::Concat,
            [Expression::reference("nickname"), Expression::constant("!")],
        ),
    );

    for tuple in plan.execute()? {
        assert_eq!(tuple.get("nickname_label"), Some(&Value::Undefined));
    }
    Ok(())
}

#[test]
fn test_project_missing_attribute() -> Result<()> {
    let plan = MappingOperator::from(ProjectNode::try_new(team_members()?, ["name", "email"])?);

    let error = plan.execute().unwrap_err();
    let MappingError::ProjectMissingAttributes { attributes, .. } = &error else {
        panic!("Unexpected error: {error}");
    };
    assert_eq!(attributes, &["email"]);
    Ok(())
}

#[test]
fn test_project_over_union_with_heterogeneous_tuples() -> Result<()> {
    let names_only = SourceNode::try_new(
        Arc::new(JsonSource::new(json!([{ "name": "Cid" }]))),
        "$[*]",
        [("name", "name")],
    )?;
    let plan = MappingPlanBuilder::new(team_members()?)
        .union([MappingOperator::from(names_only)])?
        .project(["name", "role"])?
        .build();

    let error = plan.execute().unwrap_err();
    let MappingError::ProjectMissingAttributes { attributes, tuple } = &error else {
        panic!("Unexpected error: {error}");
    };
    assert_eq!(attributes, &["role"]);
    assert!(tuple.contains("Cid"));
    Ok(())
}

#[test]
fn test_project_to_all_attributes_is_identity() -> Result<()> {
    let members = team_members()?;
    let expected = members.execute()?;
    let plan = MappingOperator::from(ProjectNode::try_new(members, ["role", "name"])?);
    assert_eq!(plan.execute()?, expected);
    Ok(())
}

#[test]
fn test_union_keeps_duplicates() -> Result<()> {
    let single = Arc::new(MappingOperator::Source(SourceNode::try_new(
        Arc::new(JsonSource::new(json!({ "value": "a" }))),
        "$",
        [("value", "$.value")],
    )?));
    let plan = MappingOperator::from(UnionNode::try_new([Arc::clone(&single), Arc::clone(&single)])?);

    let tuples = plan.execute()?;
    let expected: MappingTuple = [("value", "a")].into_iter().collect();
    assert_eq!(tuples, [expected.clone(), expected]);
    Ok(())
}

#[test]
fn test_union_preserves_child_order() -> Result<()> {
    let alice = team_members()?.extend("origin", Expression::constant("first"));
    let bob = team_members()?.extend("origin", Expression::constant("second"));
    let plan = MappingPlanBuilder::new(alice).union([bob])?.build();

    let origins = plan
        .execute()?
        .into_iter()
        .filter_map(|tuple| tuple.get("origin").cloned())
        .collect::<Vec<_>>();
    assert_eq!(
        origins,
        ["first", "first", "first", "second", "second", "second"].map(Value::from)
    );
    Ok(())
}

#[test]
fn test_union_requires_children() {
    let children: [Arc<MappingOperator>; 0] = [];
    assert!(matches!(
        UnionNode::try_new(children),
        Err(MappingError::EmptyUnion)
    ));
}

fn employees() -> Result<MappingOperator> {
    Ok(MappingOperator::Source(SourceNode::try_new(
        Arc::new(JsonSource::new(json!([
            { "name": "Ann", "dept": 10 },
            { "name": "Ben", "dept": 20 },
            { "name": "Cid", "dept": 10 },
            { "name": "Dee", "dept": 30 }
        ]))),
        "$[*]",
        [("employee", "name"), ("employee_dept", "dept")],
    )?))
}

fn departments() -> Result<MappingOperator> {
    Ok(MappingOperator::Source(SourceNode::try_new(
        Arc::new(JsonSource::new(json!([
            { "id": 10, "title": "Research" },
            { "id": 20, "title": "Sales" }
        ]))),
        "$[*]",
        [("dept_id", "id"), ("dept_title", "title")],
    )?))
}

#[test]
fn test_equi_join_employees_with_departments() -> Result<()> {
    let plan = MappingOperator::from(EquiJoinNode::try_new(
        employees()?,
        departments()?,
        ["employee_dept"],
        ["dept_id"],
    )?);

    for algorithm in [JoinAlgorithm::Hash, JoinAlgorithm::NestedLoop] {
        let options = ExecutionOptions::default().with_join_algorithm(algorithm);
        let rows = plan
            .execute_with(&options)?
            .into_iter()
            .map(|tuple| {
                assert_eq!(tuple.len(), 4);
                (tuple.get("employee").cloned(), tuple.get("dept_title").cloned())
            })
            .collect::<Vec<_>>();

        assert_eq!(
            rows,
            [
                (Some(Value::from("Ann")), Some(Value::from("Research"))),
                (Some(Value::from("Ben")), Some(Value::from("Sales"))),
                (Some(Value::from("Cid")), Some(Value::from("Research"))),
            ]
        );
    }
    Ok(())
}

#[test]
fn test_equi_join_one_to_many() -> Result<()> {
    let people = SourceNode::try_new(
        Arc::new(JsonSource::new(json!([{ "id": 1, "name": "Alice" }]))),
        "$[*]",
        [("person_id", "id"), ("name", "name")],
    )?;
    let memberships = SourceNode::try_new(
        Arc::new(JsonSource::new(json!([
            { "member": 1, "team": "dev" },
            { "member": 1, "team": "ops" },
            { "member": 2, "team": "hr" },
            { "member": 1, "team": "admin" }
        ]))),
        "$[*]",
        [("member", "member"), ("team", "team")],
    )?;

    let plan = MappingPlanBuilder::new(people.into())
        .equi_join(MappingOperator::from(memberships), ["person_id"], ["member"])?
        .build();

    let teams = plan
        .execute()?
        .into_iter()
        .filter_map(|tuple| tuple.get("team").cloned())
        .collect::<Vec<_>>();
    assert_eq!(teams, ["dev", "ops", "admin"].map(Value::from));
    Ok(())
}

#[test]
fn test_equi_join_without_matches() -> Result<()> {
    let plan = MappingOperator::from(EquiJoinNode::try_new(
        employees()?,
        departments()?,
        ["employee"],
        ["dept_title"],
    )?);
    assert!(plan.execute()?.is_empty());
    Ok(())
}

#[test]
fn test_equi_join_arity_mismatch() -> Result<()> {
    let result = EquiJoinNode::try_new(
        employees()?,
        departments()?,
        ["employee_dept"],
        ["dept_id", "dept_title"],
    );
    assert!(matches!(
        result,
        Err(MappingError::JoinKeyLengthMismatch { left: 1, right: 2 })
    ));
    Ok(())
}

#[test]
fn test_equi_join_overlapping_attributes() -> Result<()> {
    let plan = MappingOperator::from(EquiJoinNode::try_new(
        employees()?,
        employees()?,
        ["employee"],
        ["employee"],
    )?);

    let error = plan.execute().unwrap_err();
    let MappingError::JoinAttributesNotDisjoint { attributes } = &error else {
        panic!("Unexpected error: {error}");
    };
    assert_eq!(attributes, &["employee", "employee_dept"]);
    Ok(())
}

#[test]
fn test_equi_join_overlap_in_later_union_tuple() -> Result<()> {
    let titled = SourceNode::try_new(
        Arc::new(JsonSource::new(json!([{ "name": "Eve", "title": "Sales" }]))),
        "$[*]",
        [("employee", "name"), ("dept_title", "title")],
    )?;
    let left = MappingPlanBuilder::new(employees()?)
        .union([MappingOperator::from(titled)])?
        .build();
    let plan = MappingOperator::from(EquiJoinNode::try_new(
        left,
        departments()?,
        ["employee"],
        ["dept_title"],
    )?);

    let error = plan.execute().unwrap_err();
    let MappingError::JoinAttributesNotDisjoint { attributes } = &error else {
        panic!("Unexpected error: {error}");
    };
    assert_eq!(attributes, &["dept_title"]);
    Ok(())
}

#[test]
fn test_equi_join_with_empty_input() -> Result<()> {
    let nobody = || -> Result<MappingOperator> {
        Ok(MappingOperator::Source(SourceNode::try_new(
            Arc::new(JsonSource::new(json!([]))),
            "$[*]",
            [("employee", "name"), ("employee_dept", "dept")],
        )?))
    };
    let no_departments = MappingOperator::Source(SourceNode::try_new(
        Arc::new(JsonSource::new(json!({ "departments": [] }))),
        "$.departments[*]",
        [("dept_id", "id"), ("dept_title", "title")],
    )?);

    let empty_left =
        EquiJoinNode::try_new(nobody()?, departments()?, ["employee_dept"], ["dept_id"])?;
    let empty_right =
        EquiJoinNode::try_new(employees()?, no_departments, ["employee_dept"], ["dept_id"])?;
    for plan in [empty_left, empty_right].map(MappingOperator::from) {
        for algorithm in [JoinAlgorithm::Hash, JoinAlgorithm::NestedLoop] {
            let options = ExecutionOptions::default().with_join_algorithm(algorithm);
            assert!(plan.execute_with(&options)?.is_empty());
        }
    }
    Ok(())
}

#[test]
fn test_typed_literals_and_iris() -> Result<()> {
    let plan = MappingPlanBuilder::new(employees()?)
        .extend(
            "subject",
            Expression::builtin(
                BuiltinName::ToIri,
                [
                    Expression::reference("employee"),
                    Expression::constant("http://example.org/people/"),
                ],
            ),
        )
        .extend(
            "dept_literal",
            Expression::builtin(
                BuiltinName::ToLiteral,
                [
                    Expression::reference("employee_dept"),
                    Expression::constant(NamedNode::from(xsd::INTEGER)),
                ],
            ),
        )
        .project(["subject", "dept_literal"])?
        .build();

    let first = plan
        .execute()?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("Expected at least one tuple"))?;
    assert_eq!(
        first.get("subject"),
        Some(&Value::from(NamedNode::new_unchecked(
            "http://example.org/people/Ann"
        )))
    );
    assert_eq!(
        first.get("dept_literal"),
        Some(&Value::from(Literal::new_typed_literal(
            "10",
            NamedNode::from(xsd::INTEGER)
        )))
    );
    Ok(())
}

#[test]
fn test_malformed_selector_is_an_error() -> Result<()> {
    let plan = SourceNode::try_new(team_source(), "$.team[", [("name", "name")])?;
    assert!(matches!(plan.execute(), Err(MappingError::Source { .. })));

    let plan = SourceNode::try_new(team_source(), "$.team[*]", [("name", "$.name[")])?;
    assert!(matches!(plan.execute(), Err(MappingError::Source { .. })));
    Ok(())
}

#[test]
fn test_explain() -> Result<()> {
    let plan = MappingPlanBuilder::new(team_members()?)
        .extend("label", label_expression())
        .project(["label"])?
        .build();

    assert_snapshot!(plan.explain(), @r#"
    Project(
      attributes: [label]
      parent:
        Extend(
          attribute: label
          expression: concat(Ref(name), Const(": "), Ref(role))
          parent:
            Source(
              source: json
              iterator: $.team[*]
              attribute_mappings: {name: .name, role: .roles[*]}
            )
        )
    )
    "#);
    Ok(())
}

#[test]
fn test_explain_json() -> Result<()> {
    let plan = MappingPlanBuilder::new(team_members()?)
        .extend("label", label_expression())
        .build();

    assert_eq!(
        plan.explain_json()?,
        json!({
            "type": "Extend",
            "parameters": {
                "new_attribute": "label",
                "expression": {
                    "type": "FunctionCall",
                    "function": "concat",
                    "arguments": [
                        { "type": "Reference", "attribute": "name" },
                        { "type": "Constant", "value_type": "String", "value": ": " },
                        { "type": "Reference", "attribute": "role" }
                    ]
                }
            },
            "parent": {
                "type": "Source",
                "operator_class": "JsonSource",
                "parameters": {
                    "source": "json",
                    "iterator": "$.team[*]",
                    "attribute_mappings": { "name": ".name", "role": ".roles[*]" }
                }
            }
        })
    );
    Ok(())
}
