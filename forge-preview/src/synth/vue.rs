//! Vue runtime documents: the single-file component is compiled in the
//! browser by an SFC loader and mounted on `#app`.

use pixelforge_core::Framework;

use super::{page, react::indent};
use crate::{
    Document,
    assets::{self, Asset},
    escape::escape_template_literal,
};

/// Virtual path the loader resolves the component source from.
pub const COMPONENT_PATH: &str = "/component.vue";

/// Icon imports from `@ant-design/icons-vue` resolve to small placeholder
/// components showing the first two letters of the icon name. `{path}` stands
/// for [`COMPONENT_PATH`].
const LOADER_OPTIONS: &str = r#"const iconPlaceholders = new Proxy({}, {
  get: (target, name) => Vue.defineComponent({
    render: () => Vue.h('span', {
      title: String(name),
      style: 'display:inline-flex;align-items:center;justify-content:center;border:1px dashed #666;border-radius:4px;width:24px;height:24px;font-size:10px;'
    }, String(name).slice(0, 2))
  })
});
const options = {
  moduleCache: { vue: Vue, 'ant-design-vue': antd, '@ant-design/icons-vue': iconPlaceholders },
  async getFile(url) {
    if (url === '{path}') return source;
    return '';
  },
  addStyle(textContent) {
    const style = Object.assign(document.createElement('style'), { textContent });
    const ref = document.head.getElementsByTagName('style')[0] || null;
    document.head.insertBefore(style, ref);
  },
};
const { loadModule } = window['vue3-sfc-loader'];
const app = Vue.createApp({
  components: {
    'my-component': Vue.defineAsyncComponent(() => loadModule('{path}', options)),
  },
  template: '<my-component></my-component>',
});
app.use(antd);
app.mount('#app');"#;

pub(super) fn document(code: &str, framework: Framework) -> Document {
    tracing::trace!(framework = framework.slug(), "embedding vue component source");

    let head_assets: Vec<Asset> = vec![
        assets::VUE,
        assets::VUE_DAYJS,
        assets::ANTD_VUE,
        assets::ANTD_VUE_CSS,
        assets::VUE_SFC_LOADER,
        assets::TAILWIND,
    ];
    // the literal spans the user's lines as-is, so it is written verbatim
    let source = format!("const source = `{}`;", escape_template_literal(code));
    let loader = LOADER_OPTIONS.replace("{path}", COMPONENT_PATH);

    page(
        |h| h.emit(&head_assets[..]),
        |b| {
            b.line("<div id=\"app\"></div>")
                .element("<script>", "</script>", |b| {
                    b.verbatim(&source).verbatim(&indent(&loader, 6))
                })
        },
    )
}
