// crates/tracker-cli/src/messages.rs - Console strings (Spanish)
//
// Listing labels live in tracker_core::render; everything the menus print
// lives here.

// Shared
pub const MENU_TITLE: &str = "------ Menú ------";
pub const ENTER_OPTION: &str = "Ingrese su opción: ";
pub const INVALID_OPTION: &str = "Opción no válida. Por favor, ingrese una opción válida.";
pub const INVALID_NUMBER: &str = "Entrada no válida. Ingrese un número entero.";
pub const EXITING: &str = "Saliendo del programa...";

// Project tracker
pub const PROJECT_MAIN_MENU: [&str; 5] = [
    "1. Crear proyecto",
    "2. Gestionar proyectos",
    "3. Ver proyectos",
    "4. Exportar datos a archivo",
    "5. Salir",
];
pub const MANAGE_MENU_TITLE: &str = "------ Menú Gestionar Proyectos ------";
pub const MANAGE_MENU: [&str; 4] = [
    "1. Eliminar proyecto",
    "2. Marcar como completado",
    "3. Agregar comentario",
    "4. Volver al menú principal",
];
pub const ENTER_PROJECT_NAME: &str = "Ingrese el nombre del proyecto: ";
pub const ENTER_PROJECT_DESCRIPTION: &str = "Ingrese la descripción del proyecto: ";
pub const ENTER_PROJECT_DEADLINE: &str =
    "Ingrese la fecha y hora del proyecto (YYYY-MM-DD HH:MM): ";
pub const PROJECT_ADDED: &str = "Proyecto agregado exitosamente.";
pub const TOO_MANY_PROJECTS: &str = "No se pueden agregar más proyectos.";
pub const SELECT_PROJECT: &str = "Seleccione un proyecto:";
pub const ENTER_PROJECT_NUMBER: &str = "Ingrese el número del proyecto: ";
pub const INVALID_PROJECT_NUMBER: &str = "Número de proyecto no válido.";
pub const PROJECT_REMOVED: &str = "Proyecto eliminado exitosamente.";
pub const PROJECT_NOT_FOUND: &str = "Proyecto no encontrado.";
pub const PROJECT_COMPLETED: &str = "Proyecto marcado como completado.";
pub const ENTER_COMMENT: &str = "Ingrese el contenido del comentario: ";
pub const COMMENT_ADDED: &str = "Comentario agregado exitosamente.";
pub const TOO_MANY_COMMENTS: &str = "No se pueden agregar más comentarios.";
pub const BACK_TO_MAIN: &str = "Volviendo al menú principal...";
pub const ENTER_EXPORT_FILE: &str =
    "Ingrese el nombre del archivo para exportar los datos (por ejemplo, datos_proyectos.txt): ";

pub fn export_succeeded(path: &str) -> String {
    format!("Datos exportados exitosamente al archivo '{}'.", path)
}

pub fn export_failed(path: &str) -> String {
    format!("No se pudo abrir el archivo '{}'.", path)
}

// Task tracker
pub const TASK_MAIN_MENU: [&str; 5] = [
    "1. Crear tarea simple",
    "2. Crear tarea recurrente",
    "3. Ver tareas",
    "4. Marcar tarea como completada",
    "5. Salir",
];
pub const ENTER_TASK_NAME: &str = "Ingrese el nombre de la tarea: ";
pub const ENTER_TASK_DESCRIPTION: &str = "Ingrese la descripción de la tarea: ";
pub const ENTER_TASK_DEADLINE: &str = "Ingrese la fecha y hora de la tarea (YYYY-MM-DD HH:MM): ";
pub const ENTER_TASK_FREQUENCY: &str = "Ingrese la frecuencia de la tarea: ";
pub const TASK_ADDED: &str = "Tarea agregada exitosamente.";
pub const TOO_MANY_TASKS: &str = "No se pueden agregar más tareas.";
pub const ENTER_TASK_INDEX: &str =
    "Ingrese el índice de la tarea que desea marcar como completada: ";
pub const TASK_COMPLETED: &str = "Tarea marcada como completada.";
pub const INVALID_TASK_INDEX: &str = "Índice de tarea no válido.";
