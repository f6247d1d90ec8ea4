//! Template catalog: the single registry of generated files.
//!
//! Each role is described exactly once by a [`TemplateDef`]. Lookups index
//! the registry by the role's discriminant, so entries must appear in
//! declaration order of [`TemplateRole`]. The `registry_order_matches_roles`
//! test enforces this.
//!
//! # Adding a Template
//!
//! 1. Add a variant to `TemplateRole` (and to `TemplateRole::ALL`)
//! 2. Add one [`TemplateDef`] entry to [`TEMPLATE_REGISTRY`] at the same index
//! 3. The scaffold plan picks it up automatically

use crate::domain::entities::template::{Layer, TemplateDef, TemplateRole};

/// Single source of truth for every generated file.
pub static TEMPLATE_REGISTRY: [TemplateDef; 13] = [
    // ── Data ─────────────────────────────────────────────────────────────────
    TemplateDef {
        role: TemplateRole::DataBarrel,
        layer: Layer::Data,
        description: "Data layer barrel",
        path: "data/data.dart",
        source: DATA_BARREL,
    },
    TemplateDef {
        role: TemplateRole::DataModel,
        layer: Layer::Data,
        description: "Data model extending the entity",
        path: "data/models/{{FEATURE_SNAKE}}_model.dart",
        source: DATA_MODEL,
    },
    TemplateDef {
        role: TemplateRole::LocalDataSource,
        layer: Layer::Data,
        description: "Local data source interface and implementation",
        path: "data/datasources/local/{{FEATURE_SNAKE}}_local_data_source.dart",
        source: LOCAL_DATA_SOURCE,
    },
    TemplateDef {
        role: TemplateRole::RemoteDataSource,
        layer: Layer::Data,
        description: "Remote data source interface and implementation",
        path: "data/datasources/remote/{{FEATURE_SNAKE}}_remote_data_source.dart",
        source: REMOTE_DATA_SOURCE,
    },
    // ── Domain ───────────────────────────────────────────────────────────────
    TemplateDef {
        role: TemplateRole::DomainBarrel,
        layer: Layer::Domain,
        description: "Domain layer barrel",
        path: "domain/domain.dart",
        source: DOMAIN_BARREL,
    },
    TemplateDef {
        role: TemplateRole::Entity,
        layer: Layer::Domain,
        description: "Value-equality entity",
        path: "domain/entities/{{FEATURE_SNAKE}}_entity.dart",
        source: ENTITY,
    },
    TemplateDef {
        role: TemplateRole::Repository,
        layer: Layer::Domain,
        description: "Abstract repository interface",
        path: "domain/repositories/{{FEATURE_SNAKE}}_repository.dart",
        source: REPOSITORY,
    },
    // ── Presentation ─────────────────────────────────────────────────────────
    TemplateDef {
        role: TemplateRole::PresentationBarrel,
        layer: Layer::Presentation,
        description: "Presentation layer barrel",
        path: "presentation/presentation.dart",
        source: PRESENTATION_BARREL,
    },
    TemplateDef {
        role: TemplateRole::FeatureBarrel,
        layer: Layer::Feature,
        description: "Feature root barrel re-exporting all layers",
        path: "{{FEATURE_SNAKE}}.dart",
        source: FEATURE_BARREL,
    },
    TemplateDef {
        role: TemplateRole::Page,
        layer: Layer::Presentation,
        description: "Page widget",
        path: "presentation/pages/{{FEATURE_SNAKE}}_page.dart",
        source: PAGE,
    },
    TemplateDef {
        role: TemplateRole::Bloc,
        layer: Layer::Presentation,
        description: "Bloc owning the event and state parts",
        path: "presentation/bloc/{{FEATURE_SNAKE}}_bloc.dart",
        source: BLOC,
    },
    TemplateDef {
        role: TemplateRole::Event,
        layer: Layer::Presentation,
        description: "Bloc events (part file)",
        path: "presentation/bloc/{{FEATURE_SNAKE}}_event.dart",
        source: EVENT,
    },
    TemplateDef {
        role: TemplateRole::State,
        layer: Layer::Presentation,
        description: "Bloc states (part file)",
        path: "presentation/bloc/{{FEATURE_SNAKE}}_state.dart",
        source: STATE,
    },
];

/// Registry entry for `role`.
pub fn lookup(role: TemplateRole) -> &'static TemplateDef {
    &TEMPLATE_REGISTRY[role as usize]
}

/// All entries belonging to one layer, in registry order.
pub fn by_layer(layer: Layer) -> impl Iterator<Item = &'static TemplateDef> {
    TEMPLATE_REGISTRY.iter().filter(move |def| def.layer == layer)
}

// ── Sources ──────────────────────────────────────────────────────────────────

const DATA_BARREL: &str = r#"export 'datasources/local/{{FEATURE_SNAKE}}_local_data_source.dart';
export 'datasources/remote/{{FEATURE_SNAKE}}_remote_data_source.dart';
export 'models/{{FEATURE_SNAKE}}_model.dart';
"#;

const DATA_MODEL: &str = r#"import '../../domain/entities/{{FEATURE_SNAKE}}_entity.dart';

class {{FEATURE_PASCAL}}Model extends {{FEATURE_PASCAL}}Entity {
  const {{FEATURE_PASCAL}}Model();

  factory {{FEATURE_PASCAL}}Model.fromJson(Map<String, dynamic> json) {
    return const {{FEATURE_PASCAL}}Model();
  }

  Map<String, dynamic> toJson() {
    return <String, dynamic>{};
  }
}
"#;

const LOCAL_DATA_SOURCE: &str = r#"import '../../models/{{FEATURE_SNAKE}}_model.dart';

abstract class {{FEATURE_PASCAL}}LocalDataSource {
  Future<{{FEATURE_PASCAL}}Model?> getCached();

  Future<void> cache({{FEATURE_PASCAL}}Model model);
}

class {{FEATURE_PASCAL}}LocalDataSourceImpl implements {{FEATURE_PASCAL}}LocalDataSource {
  const {{FEATURE_PASCAL}}LocalDataSourceImpl();

  @override
  Future<{{FEATURE_PASCAL}}Model?> getCached() async {
    throw UnimplementedError();
  }

  @override
  Future<void> cache({{FEATURE_PASCAL}}Model model) async {
    throw UnimplementedError();
  }
}
"#;

const REMOTE_DATA_SOURCE: &str = r#"import '../../models/{{FEATURE_SNAKE}}_model.dart';

abstract class {{FEATURE_PASCAL}}RemoteDataSource {
  Future<{{FEATURE_PASCAL}}Model> fetch();
}

class {{FEATURE_PASCAL}}RemoteDataSourceImpl implements {{FEATURE_PASCAL}}RemoteDataSource {
  const {{FEATURE_PASCAL}}RemoteDataSourceImpl();

  @override
  Future<{{FEATURE_PASCAL}}Model> fetch() async {
    throw UnimplementedError();
  }
}
"#;

const DOMAIN_BARREL: &str = r#"export 'entities/{{FEATURE_SNAKE}}_entity.dart';
export 'repositories/{{FEATURE_SNAKE}}_repository.dart';
"#;

const ENTITY: &str = r#"import 'package:equatable/equatable.dart';

class {{FEATURE_PASCAL}}Entity extends Equatable {
  const {{FEATURE_PASCAL}}Entity();

  @override
  List<Object?> get props => [];
}
"#;

const REPOSITORY: &str = r#"import '../entities/{{FEATURE_SNAKE}}_entity.dart';

abstract class {{FEATURE_PASCAL}}Repository {
  Future<{{FEATURE_PASCAL}}Entity> get{{FEATURE_PASCAL}}();
}
"#;

const PRESENTATION_BARREL: &str = r#"export 'bloc/{{FEATURE_SNAKE}}_bloc.dart';
export 'pages/{{FEATURE_SNAKE}}_page.dart';
"#;

const FEATURE_BARREL: &str = r#"export 'data/data.dart';
export 'domain/domain.dart';
export 'presentation/presentation.dart';
"#;

const PAGE: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';

import '../bloc/{{FEATURE_SNAKE}}_bloc.dart';

class {{FEATURE_PASCAL}}Page extends StatelessWidget {
  const {{FEATURE_PASCAL}}Page({super.key});

  @override
  Widget build(BuildContext context) {
    return BlocProvider(
      create: (_) => {{FEATURE_PASCAL}}Bloc(),
      child: Scaffold(
        appBar: AppBar(title: const Text('{{FEATURE_PASCAL}}')),
        body: BlocBuilder<{{FEATURE_PASCAL}}Bloc, {{FEATURE_PASCAL}}State>(
          builder: (context, state) {
            return const SizedBox.shrink();
          },
        ),
      ),
    );
  }
}
"#;

const BLOC: &str = r#"import 'package:equatable/equatable.dart';
import 'package:flutter_bloc/flutter_bloc.dart';

part '{{FEATURE_SNAKE}}_event.dart';
part '{{FEATURE_SNAKE}}_state.dart';

class {{FEATURE_PASCAL}}Bloc extends Bloc<{{FEATURE_PASCAL}}Event, {{FEATURE_PASCAL}}State> {
  {{FEATURE_PASCAL}}Bloc() : super(const {{FEATURE_PASCAL}}Initial()) {
    on<{{FEATURE_PASCAL}}Event>((event, emit) {});
  }
}
"#;

const EVENT: &str = r#"part of '{{FEATURE_SNAKE}}_bloc.dart';

sealed class {{FEATURE_PASCAL}}Event extends Equatable {
  const {{FEATURE_PASCAL}}Event();

  @override
  List<Object?> get props => [];
}
"#;

const STATE: &str = r#"part of '{{FEATURE_SNAKE}}_bloc.dart';

sealed class {{FEATURE_PASCAL}}State extends Equatable {
  const {{FEATURE_PASCAL}}State();

  @override
  List<Object?> get props => [];
}

final class {{FEATURE_PASCAL}}Initial extends {{FEATURE_PASCAL}}State {
  const {{FEATURE_PASCAL}}Initial();
}
"#;
